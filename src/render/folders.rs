//! Folder sidebar view model

use crate::models::{FolderChoice, FolderFilter, FolderListResult, UNFILED_KEY};

pub const ALL_LABEL: &str = "Todas";
pub const UNFILED_LABEL: &str = "Sin Carpeta";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderIcon {
    List,
    Folder,
    Inbox,
}

impl FolderIcon {
    pub fn class(&self) -> &'static str {
        match self {
            FolderIcon::List => "fas fa-list-ul mr-2 text-gray-600",
            FolderIcon::Folder => "fas fa-folder mr-2 text-yellow-600",
            FolderIcon::Inbox => "fas fa-inbox mr-2 text-gray-500",
        }
    }
}

/// One sidebar entry; `key` becomes its `data-folder-key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub key: String,
    pub label: String,
    pub count: u64,
    pub icon: FolderIcon,
    pub active: bool,
}

/// "All" first (active), server folders in server order, "No Folder" last
pub fn render_folders(list: &FolderListResult) -> Vec<FolderEntry> {
    let mut entries = Vec::with_capacity(list.carpetas.len() + 2);

    entries.push(FolderEntry {
        key: String::new(),
        label: ALL_LABEL.to_string(),
        count: list.total_count,
        icon: FolderIcon::List,
        active: true,
    });

    entries.extend(list.carpetas.iter().map(|folder| FolderEntry {
        key: folder.nombre.clone(),
        label: folder.nombre.clone(),
        count: folder.count,
        icon: FolderIcon::Folder,
        active: false,
    }));

    entries.push(FolderEntry {
        key: UNFILED_KEY.to_string(),
        label: UNFILED_LABEL.to_string(),
        count: list.sin_carpeta_count,
        icon: FolderIcon::Inbox,
        active: false,
    });

    entries
}

/// Move the highlight to `filter`; keeps "All" if the folder is gone
pub fn mark_active(entries: &mut [FolderEntry], filter: &FolderFilter) {
    let key = filter.key();
    let found = entries.iter().any(|e| e.key == key);
    for entry in entries.iter_mut() {
        entry.active = if found { entry.key == key } else { entry.key.is_empty() };
    }
}

/// Dropdown options: listed folders that carry ids, else the page-seeded ones
pub fn folder_choices(list: &FolderListResult, seeded: &[FolderChoice]) -> Vec<FolderChoice> {
    let listed: Vec<FolderChoice> = list
        .carpetas
        .iter()
        .filter_map(|f| {
            f.id.as_ref().map(|id| FolderChoice {
                id: id.clone(),
                nombre: f.nombre.clone(),
            })
        })
        .collect();

    if listed.is_empty() {
        seeded.to_vec()
    } else {
        listed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Folder;

    fn folder(nombre: &str, count: u64, id: Option<&str>) -> Folder {
        Folder {
            id: id.map(str::to_string),
            nombre: nombre.to_string(),
            count,
        }
    }

    fn listing() -> FolderListResult {
        FolderListResult {
            carpetas: vec![folder("Zeta", 2, None), folder("Alfa", 4, None)],
            sin_carpeta_count: 11,
            total_count: 3,
        }
    }

    #[test]
    fn test_synthetic_entries_wrap_server_folders() {
        let entries = render_folders(&listing());

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].key, "");
        assert_eq!(entries[0].label, ALL_LABEL);
        assert!(entries[0].active);
        // Server order, not re-sorted
        assert_eq!(entries[1].label, "Zeta");
        assert_eq!(entries[2].label, "Alfa");
        assert_eq!(entries[3].key, UNFILED_KEY);
        assert_eq!(entries[3].label, UNFILED_LABEL);
        assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn test_synthetic_counts_are_taken_verbatim() {
        let entries = render_folders(&listing());
        // Inconsistent on purpose: the server is the source of truth
        assert_eq!(entries[0].count, 3);
        assert_eq!(entries[3].count, 11);
    }

    #[test]
    fn test_empty_listing_still_has_two_entries() {
        let entries = render_folders(&FolderListResult::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].count, 0);
        assert_eq!(entries[1].count, 0);
    }

    #[test]
    fn test_mark_active() {
        let mut entries = render_folders(&listing());

        mark_active(&mut entries, &FolderFilter::Named("Alfa".into()));
        assert_eq!(entries.iter().filter(|e| e.active).map(|e| e.label.as_str()).collect::<Vec<_>>(), vec!["Alfa"]);

        mark_active(&mut entries, &FolderFilter::Unfiled);
        assert!(entries[3].active && !entries[2].active);

        mark_active(&mut entries, &FolderFilter::Named("Borrada".into()));
        assert!(entries[0].active);
        assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn test_folder_choices_prefer_listed_ids() {
        let seeded = vec![FolderChoice { id: "1".into(), nombre: "Semilla".into() }];

        assert_eq!(folder_choices(&listing(), &seeded), seeded);

        let with_ids = FolderListResult {
            carpetas: vec![folder("Obras", 1, Some("5")), folder("Sin id", 0, None)],
            ..Default::default()
        };
        assert_eq!(
            folder_choices(&with_ids, &seeded),
            vec![FolderChoice { id: "5".into(), nombre: "Obras".into() }]
        );
    }
}

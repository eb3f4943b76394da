//! In-memory fakes for gateway and coordinator tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::LocalSpawner;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use crate::commands::{ApiClient, ApiError, ApiRequest, ApiResponse, CsrfSource, Feedback, Transport};
use crate::config::DashboardConfig;
use crate::dashboard::{DashboardView, Executor};
use crate::modal::ModalState;
use crate::models::{FolderFilter, FolderListResult, Notice, SearchResult};

type Reply = Result<ApiResponse, ApiError>;

pub fn ok_json(body: serde_json::Value) -> Reply {
    Ok(ApiResponse { status: 200, body: body.to_string() })
}

pub fn status(status: u16, body: &str) -> Reply {
    Ok(ApiResponse { status, body: body.to_string() })
}

/// Records requests and answers them with a configurable responder.
///
/// In holding mode replies are parked until [`FakeTransport::release`].
pub struct FakeTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responder: RefCell<Rc<dyn Fn(&ApiRequest) -> Reply>>,
    holding: Cell<bool>,
    held: RefCell<Vec<Option<(ApiRequest, oneshot::Sender<Reply>)>>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            requests: RefCell::new(Vec::new()),
            responder: RefCell::new(Rc::new(|_| ok_json(serde_json::json!({})))),
            holding: Cell::new(false),
            held: RefCell::new(Vec::new()),
        })
    }

    pub fn respond_with(&self, responder: impl Fn(&ApiRequest) -> Reply + 'static) {
        *self.responder.borrow_mut() = Rc::new(responder);
    }

    pub fn hold_responses(&self) {
        self.holding.set(true);
    }

    /// Answer the `index`-th parked request
    pub fn release(&self, index: usize) {
        let parked = self.held.borrow_mut()[index].take();
        if let Some((request, tx)) = parked {
            let responder = Rc::clone(&self.responder.borrow());
            let _ = tx.send(responder(&request));
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, url_prefix: &str) -> Vec<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.url.starts_with(url_prefix))
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Reply {
        self.requests.borrow_mut().push(request.clone());
        if self.holding.get() {
            let (tx, rx) = oneshot::channel();
            self.held.borrow_mut().push(Some((request, tx)));
            return rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("request dropped".to_string())));
        }
        let responder = Rc::clone(&self.responder.borrow());
        responder(&request)
    }
}

#[derive(Default)]
pub struct RecordingFeedback {
    loading: RefCell<Vec<bool>>,
    notices: RefCell<Vec<Notice>>,
}

impl RecordingFeedback {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn loading_changes(&self) -> Vec<bool> {
        self.loading.borrow().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Feedback for RecordingFeedback {
    fn set_loading(&self, loading: bool) {
        self.loading.borrow_mut().push(loading);
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

pub struct StaticCsrf(pub Option<String>);

impl CsrfSource for StaticCsrf {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

pub fn api_client(
    transport: &Rc<FakeTransport>,
    feedback: &Rc<RecordingFeedback>,
    csrf: Option<&str>,
) -> ApiClient {
    ApiClient::new(
        Rc::new(DashboardConfig::default()),
        transport.clone(),
        Rc::new(StaticCsrf(csrf.map(str::to_string))),
        feedback.clone(),
    )
}

impl Executor for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawn_local(task).expect("local pool is alive");
    }
}

/// Records everything the coordinator pushes to the view
#[derive(Default)]
pub struct RecordingView {
    pub feedback: RecordingFeedback,
    pub quotes: RefCell<Vec<SearchResult>>,
    pub folders: RefCell<Vec<FolderListResult>>,
    pub active: RefCell<Vec<FolderFilter>>,
    pub modals: RefCell<Vec<ModalState>>,
}

impl RecordingView {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn last_modal(&self) -> ModalState {
        self.modals.borrow().last().cloned().unwrap_or_default()
    }
}

impl Feedback for RecordingView {
    fn set_loading(&self, loading: bool) {
        self.feedback.set_loading(loading);
    }

    fn notify(&self, notice: Notice) {
        self.feedback.notify(notice);
    }
}

impl DashboardView for RecordingView {
    fn show_quotes(&self, result: SearchResult) {
        self.quotes.borrow_mut().push(result);
    }

    fn show_folders(&self, list: FolderListResult) {
        self.folders.borrow_mut().push(list);
    }

    fn set_active_folder(&self, folder: FolderFilter) {
        self.active.borrow_mut().push(folder);
    }

    fn show_modal(&self, modal: ModalState) {
        self.modals.borrow_mut().push(modal);
    }
}

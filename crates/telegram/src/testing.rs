//! Recording doubles for the collaborators

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proxy::{HealthResult, ProxyRecord};
use teloxide::types::{ChatId, InlineKeyboardMarkup};

use crate::collaborators::{ArtifactRenderer, DomainRegistrar, HealthProbe, ProxySource};
use crate::error::{BotError, BotResult};
use crate::messenger::Messenger;
use crate::router::{Collaborators, Router};

/// One outbound call seen by [`RecordingMessenger`]
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message {
        chat_id: ChatId,
        text: String,
        markup: Option<InlineKeyboardMarkup>,
    },
    Document {
        chat_id: ChatId,
        content: Vec<u8>,
        filename: String,
    },
    Ack {
        id: String,
    },
}

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
}

impl RecordingMessenger {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: Option<InlineKeyboardMarkup>,
    ) -> BotResult<()> {
        self.record(Sent::Message {
            chat_id,
            text: text.to_string(),
            markup,
        });
        Ok(())
    }

    async fn send_document(&self, chat_id: ChatId, content: Vec<u8>, filename: &str) -> BotResult<()> {
        self.record(Sent::Document {
            chat_id,
            content,
            filename: filename.to_string(),
        });
        Ok(())
    }

    async fn answer_callback_query(&self, callback_query_id: &str) -> BotResult<()> {
        self.record(Sent::Ack {
            id: callback_query_id.to_string(),
        });
        Ok(())
    }
}

pub fn proxy_records() -> Vec<ProxyRecord> {
    proxy::parse_proxy_list(
        "1.1.1.1,443,US,Alpha\n2.2.2.2,443,SG,Beta\n3.3.3.3,8443,US,Gamma\n4.4.4.4,443,ID,Delta",
    )
}

pub struct FakeDirectory {
    proxies: Vec<ProxyRecord>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl FakeDirectory {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProxySource for FakeDirectory {
    async fn proxy_list(&self) -> BotResult<Vec<ProxyRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(BotError::Message("directory unavailable".to_string()));
        }
        Ok(self.proxies.clone())
    }
}

pub struct FakeHealth {
    calls: Mutex<Vec<(String, String)>>,
    result: Mutex<HealthResult>,
}

impl FakeHealth {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_result(&self, result: HealthResult) {
        *self.result.lock().unwrap() = result;
    }
}

#[async_trait]
impl HealthProbe for FakeHealth {
    async fn check_health(&self, host: &str, port: &str) -> BotResult<HealthResult> {
        self.calls
            .lock()
            .unwrap()
            .push((host.to_string(), port.to_string()));
        Ok(self.result.lock().unwrap().clone())
    }
}

pub struct FakeRegistrar {
    calls: Mutex<Vec<String>>,
    status: Mutex<u16>,
}

impl FakeRegistrar {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_status(&self, status: u16) {
        *self.status.lock().unwrap() = status;
    }
}

#[async_trait]
impl DomainRegistrar for FakeRegistrar {
    async fn register_domain(&self, domain: &str) -> BotResult<u16> {
        self.calls.lock().unwrap().push(domain.to_string());
        Ok(*self.status.lock().unwrap())
    }
}

/// Arguments of one render call
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub hostname: String,
    pub proxies: Vec<ProxyRecord>,
    pub page: usize,
}

#[derive(Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArtifactRenderer for RecordingRenderer {
    fn render(&self, hostname: &str, proxies: &[ProxyRecord], page: usize) -> Vec<u8> {
        self.calls.lock().unwrap().push(RenderCall {
            hostname: hostname.to_string(),
            proxies: proxies.to_vec(),
            page,
        });
        format!("{} proxies, page {}", proxies.len(), page).into_bytes()
    }
}

/// A router wired to recording doubles, with handles on each double
pub struct Harness {
    pub router: Router,
    pub messenger: Arc<RecordingMessenger>,
    pub directory: Arc<FakeDirectory>,
    pub health: Arc<FakeHealth>,
    pub registrar: Arc<FakeRegistrar>,
    pub renderer: Arc<RecordingRenderer>,
}

pub fn harness() -> Harness {
    let messenger = Arc::new(RecordingMessenger::default());
    let directory = Arc::new(FakeDirectory {
        proxies: proxy_records(),
        calls: AtomicUsize::new(0),
        failing: AtomicBool::new(false),
    });
    let health = Arc::new(FakeHealth {
        calls: Mutex::new(Vec::new()),
        result: Mutex::new(HealthResult(serde_json::Value::Null)),
    });
    let registrar = Arc::new(FakeRegistrar {
        calls: Mutex::new(Vec::new()),
        status: Mutex::new(200),
    });
    let renderer = Arc::new(RecordingRenderer::default());

    let router = Router::new(Collaborators {
        messenger: messenger.clone(),
        directory: directory.clone(),
        health: health.clone(),
        registrar: registrar.clone(),
        renderer: renderer.clone(),
    });

    Harness {
        router,
        messenger,
        directory,
        health,
        registrar,
        renderer,
    }
}

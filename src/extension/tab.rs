//! Tabs, their page runtimes, and the tab registry

use super::ipc::{IpcChannel, IpcMessage, IpcMessageType};
use crate::config::InspectorConfig;
use crate::dom::Document;
use crate::inspector::{InputEvent, Inspector};
use crate::protocol::{Command, Response};
use crate::utils::{BoxscopeError, Result};
use std::collections::BTreeMap;
use url::Url;

/// Schemes whose pages accept injected scripts
const SCRIPTABLE_SCHEMES: [&str; 3] = ["http", "https", "file"];

/// Unique tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The overlay living inside a page, with its end of the command channel
#[derive(Debug)]
struct PageRuntime {
    inspector: Inspector,
    port: IpcChannel,
}

/// A browser tab: a page plus, once injected, the overlay runtime
#[derive(Debug)]
pub struct Tab {
    id: TabId,
    url: String,
    document: Document,
    config: InspectorConfig,
    runtime: Option<PageRuntime>,
    host_port: Option<IpcChannel>,
}

impl Tab {
    pub fn new(id: TabId, url: &str, document: Document) -> Self {
        Self {
            id,
            url: url.to_string(),
            document,
            config: InspectorConfig::default(),
            runtime: None,
            host_port: None,
        }
    }

    /// Use `config` for overlays injected from now on
    pub fn with_config(mut self, config: InspectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// The injected overlay, if any
    pub fn inspector(&self) -> Option<&Inspector> {
        self.runtime.as_ref().map(|r| &r.inspector)
    }

    /// Whether scripts may be injected into this tab's page
    pub fn is_scriptable(&self) -> bool {
        Url::parse(&self.url)
            .map(|url| SCRIPTABLE_SCHEMES.contains(&url.scheme()))
            .unwrap_or(false)
    }

    fn ensure_scriptable(&self) -> Result<()> {
        if self.is_scriptable() {
            Ok(())
        } else {
            Err(BoxscopeError::Injection {
                url: self.url.clone(),
                reason: "page does not accept injected scripts".to_string(),
            })
        }
    }

    /// Attach the overlay runtime if it is not attached yet.
    ///
    /// Returns whether it was already attached.
    pub fn inject(&mut self) -> Result<bool> {
        if let Err(err) = self.ensure_scriptable() {
            log::warn!("tab {}: {}", self.id, err);
            return Err(err);
        }
        if self.runtime.is_some() {
            return Ok(true);
        }

        let inspector = Inspector::new(self.config.clone(), self.document.prefers_dark_scheme());
        inspector.install(&mut self.document);
        let (host_port, page_port) = IpcChannel::pair();
        self.runtime = Some(PageRuntime {
            inspector,
            port: page_port,
        });
        self.host_port = Some(host_port);
        log::info!("tab {}: overlay attached to {}", self.id, self.url);
        Ok(false)
    }

    /// Load a new page; the old page's runtime and listener go away
    pub fn navigate(&mut self, url: &str, document: Document) {
        log::info!("tab {}: navigating to {}", self.id, url);
        self.url = url.to_string();
        self.document = document;
        self.runtime = None;
    }

    /// Forward a page event to the overlay; false if none is attached
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        match self.runtime.as_mut() {
            Some(runtime) => {
                runtime.inspector.handle_event(&mut self.document, event);
                true
            }
            None => false,
        }
    }

    /// Run one page event-loop turn: answer every queued request.
    ///
    /// Returns the number of requests answered.
    pub fn pump(&mut self) -> usize {
        let Some(runtime) = self.runtime.as_mut() else {
            return 0;
        };
        let mut answered = 0;
        while let Some(message) = runtime.port.try_recv() {
            if message.msg_type != IpcMessageType::Request {
                continue;
            }
            let command = match message.decode::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::warn!("tab {}: dropping malformed request: {}", self.id, err);
                    continue;
                }
            };
            let Some(response) = runtime.inspector.handle_command(&mut self.document, &command) else {
                log::debug!("tab {}: no handler for `{}`", self.id, command.action());
                continue;
            };
            match IpcMessage::response(message.sequence_id, &response)
                .and_then(|reply| runtime.port.send(reply))
            {
                Ok(()) => answered += 1,
                Err(err) => log::warn!("tab {}: could not reply: {}", self.id, err),
            }
        }
        answered
    }

    /// Send a command to the page and wait for the reply within one turn
    pub fn send_command(&mut self, command: &Command) -> Result<Response> {
        let action = command.action();
        let request = IpcMessage::request(command)?;
        let sequence_id = request.sequence_id;

        self.host_port
            .as_ref()
            .ok_or_else(|| BoxscopeError::delivery(action, "no listener in page"))?
            .send(request)
            .map_err(|_| BoxscopeError::delivery(action, "no listener in page"))?;

        self.pump();

        let port = self
            .host_port
            .as_ref()
            .ok_or_else(|| BoxscopeError::delivery(action, "no listener in page"))?;
        while let Some(reply) = port.try_recv() {
            if reply.msg_type == IpcMessageType::Response && reply.sequence_id == sequence_id {
                return reply.decode();
            }
        }
        Err(BoxscopeError::delivery(action, "page sent no response"))
    }

    /// Every resolved property of the first element matching `selector`,
    /// or `None` when nothing matches
    pub fn computed_style(&self, selector: &str) -> Result<Option<BTreeMap<String, String>>> {
        self.ensure_scriptable()?;
        Ok(self
            .document
            .query_selector(selector)
            .and_then(|id| self.document.computed_style(id))
            .map(|style| style.to_map()))
    }
}

/// Open tabs and which one is active
#[derive(Debug, Default)]
pub struct Browser {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    next_id: u64,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a tab and make it active
    pub fn open_tab(&mut self, url: &str, document: Document) -> TabId {
        self.next_id += 1;
        let id = TabId::new(self.next_id);
        self.tabs.push(Tab::new(id, url, document));
        self.active = Some(id);
        id
    }

    /// Add a prepared tab and make it active
    pub fn insert_tab(&mut self, tab: Tab) -> TabId {
        let id = tab.id();
        self.next_id = self.next_id.max(id.0);
        self.tabs.push(tab);
        self.active = Some(id);
        id
    }

    pub fn close_tab(&mut self, id: TabId) {
        self.tabs.retain(|t| t.id() != id);
        if self.active == Some(id) {
            self.active = self.tabs.last().map(Tab::id);
        }
    }

    pub fn activate(&mut self, id: TabId) -> bool {
        if self.tab(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id() == id)
    }

    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id() == id)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active?;
        self.tab_mut(id)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}

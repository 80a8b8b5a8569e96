//! In-memory doubles for the provider ports and sinks.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use bce_cert_cleaner::domain::ports::{
    BindingSource, CertificateRepository, OperatorInput, ProviderError, ProviderResult,
    RecordLevel, RecordSink, RunEvent, RunEventSink,
};
use bce_cert_cleaner::CertificateRecord;

/// Certificate service holding records in memory; deletes remove them
pub struct FakeCertificateService {
    records: RefCell<Vec<CertificateRecord>>,
    failing_deletes: HashSet<String>,
    list_error: Option<ProviderError>,
    pub delete_calls: RefCell<Vec<String>>,
}

impl FakeCertificateService {
    pub fn new(records: Vec<CertificateRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            failing_deletes: HashSet::new(),
            list_error: None,
            delete_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_delete(mut self, id: &str) -> Self {
        self.failing_deletes.insert(id.to_string());
        self
    }

    pub fn failing_list(mut self, err: ProviderError) -> Self {
        self.list_error = Some(err);
        self
    }

    pub fn remaining_ids(&self) -> Vec<String> {
        self.records.borrow().iter().map(|r| r.id.clone()).collect()
    }
}

impl CertificateRepository for FakeCertificateService {
    fn list_certificates(&self) -> ProviderResult<Vec<CertificateRecord>> {
        match &self.list_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.records.borrow().clone()),
        }
    }

    fn delete_certificate(&self, id: &str) -> ProviderResult<()> {
        self.delete_calls.borrow_mut().push(id.to_string());
        if self.failing_deletes.contains(id) {
            return Err(ProviderError::Service {
                status: 400,
                code: "CertificateInUse".to_string(),
                message: "certificate is bound".to_string(),
                request_id: "req-1".to_string(),
            });
        }
        self.records.borrow_mut().retain(|r| r.id != id);
        Ok(())
    }
}

/// CDN service: domain -> bound certificate id
#[derive(Default)]
pub struct FakeCdnService {
    domains: Vec<String>,
    bindings: HashMap<String, String>,
    failing_lookups: HashSet<String>,
}

impl FakeCdnService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bound(mut self, domain: &str, cert_id: &str) -> Self {
        self.domains.push(domain.to_string());
        self.bindings.insert(domain.to_string(), cert_id.to_string());
        self
    }

    pub fn unbound(mut self, domain: &str) -> Self {
        self.domains.push(domain.to_string());
        self
    }

    pub fn failing(mut self, domain: &str) -> Self {
        self.domains.push(domain.to_string());
        self.failing_lookups.insert(domain.to_string());
        self
    }
}

impl BindingSource for FakeCdnService {
    fn list_domains(&self) -> ProviderResult<Vec<String>> {
        Ok(self.domains.clone())
    }

    fn binding_for_domain(&self, domain: &str) -> ProviderResult<Option<String>> {
        if self.failing_lookups.contains(domain) {
            return Err(ProviderError::Transport("timed out".to_string()));
        }
        Ok(self.bindings.get(domain).cloned())
    }
}

/// Operator input replaying scripted lines, then EOF
pub struct ScriptedInput {
    lines: RefCell<VecDeque<String>>,
    pub reads: RefCell<usize>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|l| l.to_string()).collect()),
            reads: RefCell::new(0),
        }
    }
}

impl OperatorInput for ScriptedInput {
    fn read_line(&self) -> String {
        *self.reads.borrow_mut() += 1;
        self.lines.borrow_mut().pop_front().unwrap_or_default()
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub records: Mutex<Vec<(RecordLevel, String)>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == RecordLevel::Error)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl RecordSink for RecordingSink {
    fn emit(&self, level: RecordLevel, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

#[derive(Default)]
pub struct EventLog {
    pub events: Mutex<Vec<RunEvent>>,
}

impl EventLog {
    pub fn snapshot(&self) -> Vec<RunEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RunEventSink for EventLog {
    fn on_event(&self, event: RunEvent) {
        self.events.lock().unwrap().push(event);
    }
}

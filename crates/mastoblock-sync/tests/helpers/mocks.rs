#![allow(dead_code)]

use async_trait::async_trait;
use mastoblock_core::{
    BlocklistFeed, DomainBlock, DomainBlockStore, FeedSource, RawBlockRule, RemoteDomainBlock,
    Result, Severity, SyncError,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct MockFeed {
    feed: Mutex<BlocklistFeed>,
    fetch_count: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    should_fail: AtomicBool,
    delay: Duration,
}

impl MockFeed {
    pub fn new(feed: BlocklistFeed) -> Self {
        Self {
            feed: Mutex::new(feed),
            fetch_count: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            should_fail: AtomicBool::new(false),
            delay: Duration::ZERO,
        }
    }

    pub fn empty() -> Self {
        Self::new(BlocklistFeed::default())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_feed(&self, feed: BlocklistFeed) {
        *self.feed.lock().unwrap() = feed;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeed {
    async fn fetch(&self) -> Result<BlocklistFeed> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SyncError::Http("connection refused".into()));
        }
        Ok(self.feed.lock().unwrap().clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Create(String),
    Update(String, String),
    Delete(String),
}

pub struct MockStore {
    blocks: Mutex<Vec<RemoteDomainBlock>>,
    calls: Mutex<Vec<StoreCall>>,
    fail_list: AtomicBool,
    next_id: AtomicUsize,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_blocks(Vec::new())
    }

    pub fn with_blocks(blocks: Vec<RemoteDomainBlock>) -> Self {
        Self {
            blocks: Mutex::new(blocks),
            calls: Mutex::new(Vec::new()),
            fail_list: AtomicBool::new(false),
            next_id: AtomicUsize::new(100),
        }
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| !matches!(c, StoreCall::List))
            .count()
    }

    pub fn blocks(&self) -> Vec<RemoteDomainBlock> {
        self.blocks.lock().unwrap().clone()
    }
}

#[async_trait]
impl DomainBlockStore for MockStore {
    async fn list(&self) -> Result<Vec<RemoteDomainBlock>> {
        self.calls.lock().unwrap().push(StoreCall::List);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(SyncError::Api {
                code: 502,
                message: "Bad Gateway".into(),
            });
        }
        Ok(self.blocks())
    }

    async fn create(&self, block: &DomainBlock) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Create(block.domain.clone()));
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.blocks.lock().unwrap().push(remote(&id, block));
        Ok(())
    }

    async fn update(&self, id: &str, block: &DomainBlock) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Update(id.to_string(), block.domain.clone()));
        let mut blocks = self.blocks.lock().unwrap();
        if let Some(existing) = blocks.iter_mut().find(|b| b.id == id) {
            *existing = remote(id, block);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Delete(id.to_string()));
        self.blocks.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}

pub fn remote(id: &str, block: &DomainBlock) -> RemoteDomainBlock {
    RemoteDomainBlock {
        id: id.to_string(),
        domain: block.domain.clone(),
        severity: block.severity,
        reject_media: block.reject_media,
        reject_reports: block.reject_reports,
        public_comment: block.public_comment.clone(),
    }
}

pub fn feed_rule(domains: &[&str], severity: Severity) -> RawBlockRule {
    RawBlockRule {
        domains: domains.iter().map(ToString::to_string).collect(),
        severity,
        ..RawBlockRule::default()
    }
}

pub fn feed(rules: Vec<RawBlockRule>) -> BlocklistFeed {
    BlocklistFeed {
        domain_blocks: rules,
    }
}

// src/search.rs
//
// Asynchronous front of the generator. Validation runs on the caller's
// thread; generation runs on a worker after the simulated latency, and the
// result comes back over a channel. One search in flight at a time is the
// expected use; a newer PendingSearch simply supersedes an older one.

use std::{
    sync::{ mpsc, Arc },
    thread,
    time::{ Duration, Instant },
};

use rand::Rng;

use crate::{
    business::BusinessRecord,
    config::options::SearchOptions,
    error::SearchError,
    generator::{ BusinessSource, MockSource, SearchQuery },
    progress::Progress,
};

/// A search whose results are not available yet.
pub struct PendingSearch {
    request: SearchQuery,
    rx: mpsc::Receiver<Vec<BusinessRecord>>,
    started: Instant,
}

/// Finished search: the request that produced it plus its records.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub request: SearchQuery,
    pub records: Vec<BusinessRecord>,
}

impl PendingSearch {
    pub fn request(&self) -> &SearchQuery { &self.request }

    pub fn elapsed(&self) -> Duration { self.started.elapsed() }

    /// Non-blocking. `None` while the worker is still sleeping.
    /// A worker that died without answering yields an empty result set (logged).
    pub fn poll(&self) -> Option<SearchOutcome> {
        match self.rx.try_recv() {
            Ok(records) => Some(self.outcome(records)),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.log_lost();
                Some(self.outcome(Vec::new()))
            }
        }
    }

    /// Block until the worker answers.
    pub fn wait(self) -> SearchOutcome {
        let records = match self.rx.recv() {
            Ok(records) => records,
            Err(_) => {
                self.log_lost();
                Vec::new()
            }
        };
        SearchOutcome { request: self.request, records }
    }

    fn log_lost(&self) {
        loge!("Search: Worker exited without a result query={:?} after {}ms",
            self.request.query(), self.elapsed().as_millis());
    }

    fn outcome(&self, records: Vec<BusinessRecord>) -> SearchOutcome {
        SearchOutcome { request: self.request.clone(), records }
    }
}

/// Delay for one search: fixed part plus uniform `0..=jitter_ms`.
pub fn latency(opts: &SearchOptions) -> Duration {
    let jitter = if opts.jitter_ms == 0 { 0 } else { rand::rng().random_range(0..=opts.jitter_ms) };
    opts.base_delay() + Duration::from_millis(jitter)
}

/// Validate, then run the mock source on a worker thread.
pub fn submit<F>(
    query: &str,
    location: &str,
    opts: &SearchOptions,
    on_ready: F,
) -> Result<PendingSearch, SearchError>
where
    F: FnOnce() + Send + 'static,
{
    submit_with(Arc::new(MockSource::new(opts.seed)), query, location, opts, on_ready)
}

/// Same as [`submit`] with a caller-provided source.
/// `on_ready` fires on the worker right after the result is sent (GUI: request a repaint).
pub fn submit_with<F>(
    source: Arc<dyn BusinessSource>,
    query: &str,
    location: &str,
    opts: &SearchOptions,
    on_ready: F,
) -> Result<PendingSearch, SearchError>
where
    F: FnOnce() + Send + 'static,
{
    let request = SearchQuery::new(query, location)?;
    let delay = latency(opts);

    logf!("Search: Begin query={:?} location={:?} delay={}ms",
        request.query(), request.location(), delay.as_millis());

    let (tx, rx) = mpsc::channel();
    let worker_req = request.clone();

    thread::spawn(move || {
        thread::sleep(delay);
        let records = source.search(&worker_req);
        logd!("Search: Worker produced {} record(s)", records.len());
        // Receiver may be gone if the caller moved on; nothing to do then.
        let _ = tx.send(records);
        on_ready();
    });

    Ok(PendingSearch { request, rx, started: Instant::now() })
}

/// Blocking convenience for the CLI: submit, report, wait.
pub fn run_blocking(
    query: &str,
    location: &str,
    opts: &SearchOptions,
    progress: &mut dyn Progress,
) -> Result<SearchOutcome, SearchError> {
    let pending = submit(query, location, opts, || {})?;
    progress.begin(pending.request().query());
    let outcome = pending.wait();
    logf!("Search: OK query={:?} found={}", outcome.request.query(), outcome.records.len());
    progress.finish(outcome.records.len());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;

    #[test]
    fn empty_query_never_spawns() {
        let res = submit("   ", "Chicago", &SearchOptions::immediate(), || {
            panic!("worker must not run for an invalid query")
        });
        assert!(matches!(res, Err(SearchError::EmptyQuery)));
    }

    #[test]
    fn run_blocking_returns_the_request_with_its_records() {
        let opts = SearchOptions::immediate().with_seed(11);
        let outcome = run_blocking("Pharmacies", "Boston", &opts, &mut NullProgress).unwrap();
        assert_eq!(outcome.request.query(), "Pharmacies");
        assert!(outcome.records.iter().all(|r| r.address.contains(", Boston, NY ")));

        let err = run_blocking("", "Boston", &opts, &mut NullProgress).err();
        assert_eq!(err, Some(SearchError::EmptyQuery));
    }

    struct PanickingSource;

    impl BusinessSource for PanickingSource {
        fn search(&self, _request: &SearchQuery) -> Vec<BusinessRecord> {
            panic!("source blew up")
        }
    }

    #[test]
    fn dead_worker_yields_empty_outcome() {
        let pending = submit_with(Arc::new(PanickingSource), "Gyms", "", &SearchOptions::immediate(), || {})
            .unwrap();
        let outcome = pending.wait();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.request.query(), "Gyms");
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let opts = SearchOptions { delay_ms: 20, jitter_ms: 5, seed: None };
        for _ in 0..100 {
            let d = latency(&opts);
            assert!(d >= Duration::from_millis(20) && d <= Duration::from_millis(25));
        }
    }
}

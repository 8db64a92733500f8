use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{PromptScanner, ScanReport};

/// Scanner returning a canned verdict and recording what it was asked to scan.
#[derive(Clone)]
pub struct StaticScanner {
    verdict: Option<ScanReport>,
    pub scanned: Arc<Mutex<Vec<String>>>,
}

impl StaticScanner {
    pub fn valid() -> Self {
        Self::with_verdict(Some(ScanReport { is_valid: true, scanners: BTreeMap::new() }))
    }

    pub fn invalid(scores: &[(&str, f64)]) -> Self {
        let scanners = scores.iter().map(|(name, score)| (name.to_string(), *score)).collect();
        Self::with_verdict(Some(ScanReport { is_valid: false, scanners }))
    }

    /// Every scan fails as if the service were down.
    pub fn unavailable() -> Self {
        Self::with_verdict(None)
    }

    fn with_verdict(verdict: Option<ScanReport>) -> Self {
        Self { verdict, scanned: Arc::new(Mutex::new(vec![])) }
    }
}

impl PromptScanner for StaticScanner {
    fn scan(&self, text: &str) -> Result<ScanReport, AppError> {
        self.scanned.lock().unwrap().push(text.to_string());
        self.verdict.clone().ok_or_else(|| AppError::ScannerService {
            message: "connection refused".to_string(),
            status: None,
        })
    }
}

#![allow(dead_code)]

use number_cruncher::utils::parse::parse_operand;
use number_cruncher::NumberCruncher;
use serde::Deserialize;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Parses test data and hands any failure back to the caller.
pub fn parse_returns_error(input: &str) -> number_cruncher::Result<f64> {
    parse_operand(input)
}

/// Parses test data, failing the calling test if the data is unusable.
#[track_caller]
pub fn parse_or_fail(input: &str) -> f64 {
    match parse_operand(input) {
        Ok(value) => value,
        Err(e) => panic!("test data {:?} is not usable: {}", input, e),
    }
}

/// Restores an environment variable to its previous state when dropped.
pub struct EnvGuard {
    key: String,
    original: Option<OsString>,
}

pub fn set_env(key: &str, value: &str) -> EnvGuard {
    let original = std::env::var_os(key);
    std::env::set_var(key, value);

    EnvGuard {
        key: key.to_string(),
        original,
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.original.take() {
            Some(value) => std::env::set_var(&self.key, value),
            None => std::env::remove_var(&self.key),
        }
    }
}

/// Writes `contents` to a temp file that is deleted when the handle drops.
pub fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture file");
    file.write_all(contents.as_bytes())
        .expect("write fixture file");
    file
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddCase {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub expected: f64,
}

#[derive(Debug, Deserialize)]
struct AddCaseFile {
    cases: Vec<AddCase>,
}

#[track_caller]
pub fn load_add_cases(path: impl AsRef<Path>) -> Vec<AddCase> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {}", path.display(), e));
    let file: AddCaseFile =
        toml::from_str(&raw).unwrap_or_else(|e| panic!("parse {}: {}", path.display(), e));
    file.cases
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Add(f64, f64),
    Verify(f64, f64),
}

#[derive(Debug, Clone, Copy)]
enum Answer {
    Sum(f64),
    Verdict(bool),
}

#[derive(Debug)]
struct Expectation {
    call: Call,
    answer: Answer,
    hits: usize,
}

/// Hand-written double for [`NumberCruncher`].
///
/// Every call must match a registered expectation by exact arguments,
/// otherwise the mock panics. Calls are recorded in order.
#[derive(Default)]
pub struct MockNumberCruncher {
    expectations: Mutex<Vec<Expectation>>,
    calls: Mutex<Vec<Call>>,
}

pub struct ExpectAdd<'a> {
    mock: &'a MockNumberCruncher,
    x: f64,
    y: f64,
}

pub struct ExpectVerify<'a> {
    mock: &'a MockNumberCruncher,
    got: f64,
    want: f64,
}

impl MockNumberCruncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_add(&self, x: f64, y: f64) -> ExpectAdd<'_> {
        ExpectAdd { mock: self, x, y }
    }

    pub fn expect_verify(&self, got: f64, want: f64) -> ExpectVerify<'_> {
        ExpectVerify {
            mock: self,
            got,
            want,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics if any registered expectation was never hit.
    #[track_caller]
    pub fn assert_expectations(&self) {
        let unmet: Vec<Call> = self
            .expectations
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.hits == 0)
            .map(|e| e.call)
            .collect();

        if !unmet.is_empty() {
            panic!("expected calls never made: {:?}", unmet);
        }
    }

    fn register(&self, call: Call, answer: Answer) {
        self.expectations.lock().unwrap().push(Expectation {
            call,
            answer,
            hits: 0,
        });
    }

    fn answer(&self, call: Call) -> Answer {
        self.calls.lock().unwrap().push(call);

        let answer = {
            let mut expectations = self.expectations.lock().unwrap();
            expectations
                .iter_mut()
                .find(|e| e.call == call)
                .map(|e| {
                    e.hits += 1;
                    e.answer
                })
        };

        answer.unwrap_or_else(|| panic!("unexpected call: {:?}", call))
    }
}

impl ExpectAdd<'_> {
    pub fn returns(self, sum: f64) {
        self.mock
            .register(Call::Add(self.x, self.y), Answer::Sum(sum));
    }
}

impl ExpectVerify<'_> {
    pub fn returns(self, verdict: bool) {
        self.mock
            .register(Call::Verify(self.got, self.want), Answer::Verdict(verdict));
    }
}

impl NumberCruncher for MockNumberCruncher {
    fn add(&self, x: f64, y: f64) -> f64 {
        match self.answer(Call::Add(x, y)) {
            Answer::Sum(sum) => sum,
            Answer::Verdict(_) => unreachable!("add expectation answered with a verdict"),
        }
    }

    fn verify(&self, got: f64, want: f64) -> bool {
        match self.answer(Call::Verify(got, want)) {
            Answer::Verdict(verdict) => verdict,
            Answer::Sum(_) => unreachable!("verify expectation answered with a sum"),
        }
    }
}

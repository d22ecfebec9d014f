//! Property-test run profile read from the environment.
//!
//! CI raises case counts and enables forking through these variables; local
//! runs fall back to the defaults each suite passes in.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const SPANWISE_PBT_FORK_ENV_KEY: &str = "SPANWISE_PBT_FORK";
/// Environment variable controlling how often determinism properties rerun
/// an algorithm on the same input.
pub const SPANWISE_PBT_REPEATS_ENV_KEY: &str = "SPANWISE_PBT_REPEATS";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile, using the given defaults for unset or invalid
    /// variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: knob(PROGTEST_CASES_ENV_KEY, default_cases, parse_positive),
            fork: knob(SPANWISE_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

/// Reads the number of runs a determinism property should compare.
///
/// Values below two are rejected because a single run compares nothing.
///
/// # Examples
///
/// ```
/// use spanwise_test_support::ci::property_test_profile::determinism_repeats;
///
/// assert!(determinism_repeats(3) >= 2);
/// ```
#[must_use]
pub fn determinism_repeats(default: usize) -> usize {
    knob(SPANWISE_PBT_REPEATS_ENV_KEY, default, |raw| {
        let parsed = raw
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("parse error: {error}"))?;
        if parsed < 2 {
            return Err("repeats must be >= 2".to_owned());
        }
        Ok(parsed)
    })
}

fn knob<T, F>(key: &'static str, default: T, parse: F) -> T
where
    F: FnOnce(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}

//! Accumulating configuration checks.
//!
//! Checks are `Validation` values so that every violation is collected
//! before construction fails, instead of stopping at the first one.

use crate::builder::error::ConfigError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single configuration check.
pub(crate) type Check = Validation<(), NonEmptyVec<ConfigError>>;

/// Pass when `ok`, otherwise fail with the error built by `error`.
pub(crate) fn check<F>(ok: bool, error: F) -> Check
where
    F: FnOnce() -> ConfigError,
{
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error())
    }
}

pub(crate) fn reject(error: ConfigError) -> Check {
    Validation::fail(error)
}

/// Turn an already-computed result into checks, one per violation.
pub(crate) fn from_result<T>(result: &Result<T, ConfigError>) -> Vec<Check> {
    match result {
        Ok(_) => vec![Validation::success(())],
        Err(err) => err.clone().into_violations().into_iter().map(reject).collect(),
    }
}

/// Run all checks and report every failure.
pub(crate) fn collect(checks: Vec<Check>) -> Result<(), ConfigError> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(ConfigError::from_violations(
            errors.iter().cloned().collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_succeeds_when_all_checks_pass() {
        let checks = vec![check(true, || ConfigError::SelfPairedPlug { letter: 'A' })];
        assert_eq!(collect(checks), Ok(()));
    }

    #[test]
    fn collect_succeeds_with_no_checks() {
        assert_eq!(collect(Vec::new()), Ok(()));
    }

    #[test]
    fn collect_reports_single_failure_directly() {
        let checks = vec![
            check(true, || ConfigError::SelfPairedPlug { letter: 'A' }),
            reject(ConfigError::SelfPairedPlug { letter: 'B' }),
        ];
        assert_eq!(
            collect(checks),
            Err(ConfigError::SelfPairedPlug { letter: 'B' })
        );
    }

    #[test]
    fn collect_accumulates_all_failures() {
        let checks = vec![
            reject(ConfigError::SelfPairedPlug { letter: 'A' }),
            check(true, || ConfigError::SelfPairedPlug { letter: 'B' }),
            reject(ConfigError::DuplicatePlugLetter { letter: 'C' }),
        ];

        match collect(checks) {
            Err(ConfigError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(&ConfigError::SelfPairedPlug { letter: 'A' }));
                assert!(errors.contains(&ConfigError::DuplicatePlugLetter { letter: 'C' }));
            }
            other => panic!("expected multiple errors, got {other:?}"),
        }
    }

    #[test]
    fn from_result_splits_multiple() {
        let result: Result<(), ConfigError> = Err(ConfigError::Multiple(vec![
            ConfigError::SelfPairedPlug { letter: 'A' },
            ConfigError::DuplicatePlugLetter { letter: 'C' },
        ]));
        assert_eq!(from_result(&result).len(), 2);
    }
}

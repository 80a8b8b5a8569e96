//! Property tests for cleanup outcome accounting.

use proptest::prelude::*;

use bce_cert_cleaner::domain::ports::NoopEventSink;
use bce_cert_cleaner::{CandidateList, Certificate, CleanupUseCase, RunMode, Termination};

use crate::common::{
    fixed_now, record_expiring_in, FakeCertificateService, RecordingSink, ScriptedInput,
};

fn answer() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["y", "yes", "n", "no", "a", "q", "", "maybe", "Y"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every candidate is accounted for at most once, and a quit
    /// at index i leaves exactly the first i candidates processed.
    #[test]
    fn property_interactive_outcome_accounts_for_candidates(
        n in 0usize..8,
        answers in proptest::collection::vec(answer(), 0..10),
        failing in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let records: Vec<_> = (0..n)
            .map(|i| record_expiring_in(&format!("c{}", i), -3))
            .collect();
        let certs: Vec<Certificate> = records.iter().cloned().map(Certificate::from_record).collect();
        let candidates = CandidateList::select(&certs, fixed_now());

        let mut service = FakeCertificateService::new(records);
        for (i, fail) in failing.iter().enumerate().take(n) {
            if *fail {
                service = service.failing_delete(&format!("c{}", i));
            }
        }

        let mode = RunMode::from_flags(false, false, true, false).unwrap();
        let input = ScriptedInput::new(&answers);
        let sink = RecordingSink::default();
        let outcome = CleanupUseCase::new(&service, &input)
            .execute(&candidates, &mode, &sink, &NoopEventSink);

        let processed = outcome.succeeded_count() + outcome.skipped_count() + outcome.failed_count();
        prop_assert_eq!(processed, outcome.processed_count());
        prop_assert_eq!(outcome.attempted_count(), service.delete_calls.borrow().len());
        match outcome.termination {
            Termination::Quit { at } => prop_assert_eq!(processed, at),
            Termination::NothingToDo => prop_assert_eq!(n, 0),
            _ => prop_assert_eq!(processed, n),
        }
        prop_assert!(*input.reads.borrow() <= n);
    }

    /// PROPERTY: Automatic mode attempts every candidate exactly once.
    #[test]
    fn property_auto_attempts_every_candidate(
        n in 1usize..8,
        failing in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let records: Vec<_> = (0..n)
            .map(|i| record_expiring_in(&format!("c{}", i), -3))
            .collect();
        let certs: Vec<Certificate> = records.iter().cloned().map(Certificate::from_record).collect();
        let candidates = CandidateList::select(&certs, fixed_now());

        let mut service = FakeCertificateService::new(records);
        let mut expected_failures = 0;
        for (i, fail) in failing.iter().enumerate().take(n) {
            if *fail {
                service = service.failing_delete(&format!("c{}", i));
                expected_failures += 1;
            }
        }

        let mode = RunMode::from_flags(false, true, false, true).unwrap();
        let input = ScriptedInput::new(&[]);
        let sink = RecordingSink::default();
        let outcome = CleanupUseCase::new(&service, &input)
            .execute(&candidates, &mode, &sink, &NoopEventSink);

        prop_assert_eq!(outcome.attempted_count(), n);
        prop_assert_eq!(outcome.failed_count(), expected_failures);
        prop_assert_eq!(outcome.is_success(), expected_failures == 0);
        prop_assert_eq!(*input.reads.borrow(), 0);
    }

    /// PROPERTY: Answering `a` at index i attempts candidate i and every
    /// later candidate exactly once, without further prompts.
    #[test]
    fn property_all_attempts_the_rest(
        n in 1usize..8,
        prefix in proptest::collection::vec(prop::sample::select(vec!["y", "n"]), 7),
        at in 0usize..8,
        failing in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let at = at % n;
        let records: Vec<_> = (0..n)
            .map(|i| record_expiring_in(&format!("c{}", i), -3))
            .collect();
        let certs: Vec<Certificate> = records.iter().cloned().map(Certificate::from_record).collect();
        let candidates = CandidateList::select(&certs, fixed_now());

        let mut service = FakeCertificateService::new(records);
        for (i, fail) in failing.iter().enumerate().take(n) {
            if *fail {
                service = service.failing_delete(&format!("c{}", i));
            }
        }

        let mut answers: Vec<&str> = prefix[..at].to_vec();
        answers.push("a");
        answers.push("q");

        let mode = RunMode::from_flags(false, false, true, false).unwrap();
        let input = ScriptedInput::new(&answers);
        let sink = RecordingSink::default();
        let outcome = CleanupUseCase::new(&service, &input)
            .execute(&candidates, &mode, &sink, &NoopEventSink);

        let mut expected: Vec<String> = prefix[..at]
            .iter()
            .enumerate()
            .filter(|(_, answer)| **answer == "y")
            .map(|(i, _)| format!("c{}", i))
            .collect();
        expected.extend((at..n).map(|i| format!("c{}", i)));

        prop_assert_eq!(service.delete_calls.borrow().clone(), expected);
        prop_assert_eq!(*input.reads.borrow(), at + 1);
        prop_assert_eq!(outcome.termination, Termination::Completed);
        prop_assert_eq!(outcome.processed_count(), n);
    }
}

use shared::{Density, ImageType, Questionnaire, YesNo};

use crate::config;

/// Metadata of the currently selected image. The live `web_sys::File` handle
/// stays in the component; the flow only needs what validation looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub size: u64,
}

/// Submission lifecycle. Validation failures and delivery are instantaneous
/// transitions back to `Idle`, so only the suspended states are modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Multipart POST in flight.
    Submitting,
    /// Response received, holding the result until the minimum visible
    /// processing time has elapsed.
    AwaitingFloor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// A submission is already in flight; the action is ignored.
    Busy,
    NoImage,
    NoAge,
}

/// State machine behind the upload form: file selection, questionnaire
/// edits, submit gating and the minimum-latency floor. Pure so it can be
/// exercised without a browser.
pub struct UploadFlow {
    file: Option<PendingFile>,
    pub form: Questionnaire,
    errors: Vec<String>,
    phase: Phase,
    min_processing_ms: u64,
}

impl UploadFlow {
    pub fn new(min_processing_ms: u64) -> Self {
        Self {
            file: None,
            form: Questionnaire::default(),
            errors: Vec::new(),
            phase: Phase::Idle,
            min_processing_ms,
        }
    }

    pub fn file(&self) -> Option<&PendingFile> {
        self.file.as_ref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a submission is in flight; the submit control is disabled
    /// and repeat submits are ignored.
    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Accepts a candidate file. Files strictly larger than the 10 MiB cap
    /// are rejected (exactly 10 MiB passes) and any prior selection is
    /// dropped. No MIME check happens here; the picker's `accept` attribute
    /// is the only type filter, as before.
    pub fn select_file(&mut self, name: &str, size: u64) -> bool {
        if size > config::MAX_UPLOAD_BYTES {
            self.file = None;
            self.errors = vec![format!("{name} exceeds 10MB")];
            return false;
        }
        self.file = Some(PendingFile {
            name: name.to_string(),
            size,
        });
        self.errors.clear();
        true
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn set_age(&mut self, age: String) {
        self.form.age = age;
    }

    pub fn set_image_type(&mut self, image_type: ImageType) {
        self.form.image_type = image_type;
    }

    pub fn set_lump(&mut self, lump: YesNo) {
        self.form.lump = lump;
    }

    pub fn set_family(&mut self, family: YesNo) {
        self.form.family = family;
    }

    pub fn set_density(&mut self, density: Density) {
        self.form.density = density;
    }

    /// Validates the pending submission and, on success, moves to
    /// `Submitting`. The caller issues the actual POST only on `Ok`, so a
    /// validation failure never touches the network.
    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        if self.phase != Phase::Idle {
            return Err(SubmitError::Busy);
        }
        if self.file.is_none() {
            self.errors = vec!["Please upload an image.".to_string()];
            return Err(SubmitError::NoImage);
        }
        if self.form.age.is_empty() {
            self.errors = vec!["Please enter your age.".to_string()];
            return Err(SubmitError::NoAge);
        }
        self.errors.clear();
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// A 2xx response arrived `elapsed_ms` after submission start. Returns
    /// how much longer the loader must stay up so it is visible for at least
    /// the configured floor.
    pub fn response_received(&mut self, elapsed_ms: u64) -> u64 {
        if self.phase != Phase::Submitting {
            return 0;
        }
        self.phase = Phase::AwaitingFloor;
        self.min_processing_ms.saturating_sub(elapsed_ms)
    }

    /// Network or non-2xx failure: straight back to `Idle` with the generic
    /// message. The latency floor does not apply to failures.
    pub fn fail_submit(&mut self) {
        self.phase = Phase::Idle;
        self.errors = vec!["Failed to upload. Try again.".to_string()];
    }

    /// The floor elapsed and the result was handed off.
    pub fn delivered(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn dismiss_error(&mut self, index: usize) {
        if index < self.errors.len() {
            self.errors.remove(index);
        }
    }

    pub fn dismiss_all_errors(&mut self) {
        self.errors.clear();
    }
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new(config::MIN_PROCESSING_MS as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn flow_with_file_and_age() -> UploadFlow {
        let mut flow = UploadFlow::default();
        assert!(flow.select_file("scan.png", 2 * MIB));
        flow.set_age("52".into());
        flow
    }

    #[test]
    fn file_at_exactly_ten_mib_is_accepted() {
        let mut flow = UploadFlow::default();
        assert!(flow.select_file("scan.png", 10 * MIB));
        assert_eq!(flow.file().unwrap().size, 10 * MIB);
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn file_over_ten_mib_is_rejected_and_not_stored() {
        let mut flow = UploadFlow::default();
        assert!(flow.select_file("small.png", MIB));
        assert!(!flow.select_file("huge.png", 10 * MIB + 1));
        assert!(flow.file().is_none(), "prior selection must be cleared");
        assert_eq!(flow.errors(), ["huge.png exceeds 10MB"]);
    }

    #[test]
    fn accepting_a_file_clears_prior_errors() {
        let mut flow = UploadFlow::default();
        flow.select_file("huge.png", 11 * MIB);
        assert!(!flow.errors().is_empty());
        assert!(flow.select_file("ok.png", MIB));
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn submit_without_file_is_rejected_before_network() {
        let mut flow = UploadFlow::default();
        flow.set_age("52".into());
        assert_eq!(flow.begin_submit(), Err(SubmitError::NoImage));
        assert_eq!(flow.errors(), ["Please upload an image."]);
        assert_eq!(flow.phase(), Phase::Idle);
    }

    #[test]
    fn submit_without_age_is_rejected_before_network() {
        let mut flow = UploadFlow::default();
        flow.select_file("scan.png", MIB);
        assert_eq!(flow.begin_submit(), Err(SubmitError::NoAge));
        assert_eq!(flow.errors(), ["Please enter your age."]);
        assert_eq!(flow.phase(), Phase::Idle);
    }

    #[test]
    fn missing_file_is_reported_before_missing_age() {
        let mut flow = UploadFlow::default();
        assert_eq!(flow.begin_submit(), Err(SubmitError::NoImage));
    }

    #[test]
    fn valid_submit_enters_submitting() {
        let mut flow = flow_with_file_and_age();
        assert_eq!(flow.begin_submit(), Ok(()));
        assert_eq!(flow.phase(), Phase::Submitting);
        assert!(flow.is_busy());
    }

    #[test]
    fn repeat_submit_while_in_flight_is_ignored() {
        let mut flow = flow_with_file_and_age();
        flow.begin_submit().unwrap();
        assert_eq!(flow.begin_submit(), Err(SubmitError::Busy));
        // The error list is untouched by the ignored attempt.
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn latency_floor_arithmetic() {
        let mut flow = flow_with_file_and_age();
        flow.begin_submit().unwrap();
        assert_eq!(flow.response_received(0), 15_000);

        let mut flow = flow_with_file_and_age();
        flow.begin_submit().unwrap();
        assert_eq!(flow.response_received(4_000), 11_000);

        let mut flow = flow_with_file_and_age();
        flow.begin_submit().unwrap();
        assert_eq!(flow.response_received(15_000), 0);

        let mut flow = flow_with_file_and_age();
        flow.begin_submit().unwrap();
        assert_eq!(flow.response_received(60_000), 0);
    }

    #[test]
    fn latency_floor_is_configurable() {
        let mut flow = UploadFlow::new(100);
        flow.select_file("scan.png", MIB);
        flow.set_age("52".into());
        flow.begin_submit().unwrap();
        assert_eq!(flow.response_received(40), 60);
    }

    #[test]
    fn response_moves_to_awaiting_floor_then_delivery_idles() {
        let mut flow = flow_with_file_and_age();
        flow.begin_submit().unwrap();
        flow.response_received(1_000);
        assert_eq!(flow.phase(), Phase::AwaitingFloor);
        assert!(flow.is_busy());
        flow.delivered();
        assert_eq!(flow.phase(), Phase::Idle);
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn failure_returns_to_idle_without_floor() {
        let mut flow = flow_with_file_and_age();
        flow.begin_submit().unwrap();
        flow.fail_submit();
        assert_eq!(flow.phase(), Phase::Idle);
        assert_eq!(flow.errors(), ["Failed to upload. Try again."]);
    }

    #[test]
    fn dismiss_single_error_leaves_the_rest() {
        let mut flow = UploadFlow::default();
        flow.errors = vec!["a".into(), "b".into(), "c".into()];
        flow.dismiss_error(1);
        assert_eq!(flow.errors(), ["a", "c"]);
        // Out-of-range index is a no-op.
        flow.dismiss_error(10);
        assert_eq!(flow.errors(), ["a", "c"]);
    }

    #[test]
    fn dismiss_all_errors_empties_the_list() {
        let mut flow = UploadFlow::default();
        flow.errors = vec!["a".into(), "b".into()];
        flow.dismiss_all_errors();
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn questionnaire_edits_have_no_cross_field_validation() {
        let mut flow = UploadFlow::default();
        flow.set_age("not-a-number".into());
        flow.set_image_type(ImageType::Mammogram);
        flow.set_lump(YesNo::Yes);
        flow.set_family(YesNo::Yes);
        flow.set_density(Density::Fatty);
        assert!(flow.errors().is_empty());
        assert_eq!(flow.form.image_type, ImageType::Mammogram);
    }
}

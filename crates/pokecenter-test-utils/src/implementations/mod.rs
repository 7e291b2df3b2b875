//! Test implementations (fakes) of the Pokemon Center interfaces.

mod recording_nurse;

pub use recording_nurse::RecordingNurse;


pub const WHEEL_TIMING_STORAGE_KEY: &str = "wheel_timing";

pub const EMPTY_NAME_ERROR: &str = "Please enter your name to spin the wheel";
pub const MISSING_NAME_ERROR: &str = "No name was provided for this spin";
pub const SPIN_IN_PROGRESS_ERROR: &str = "The wheel is already spinning";

pub const NAME_PLACEHOLDER: &str = "Your name here...";
pub const SUBMIT_LABEL: &str = "Start Spinning";
pub const SPINNING_LABEL: &str = "Spinning...";
pub const SPIN_AGAIN_LABEL: &str = "Spin Again";
pub const CHANGE_NAME_LABEL: &str = "Change Name";

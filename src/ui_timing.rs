use std::time::Duration;

pub const DOUBLE_CLICK: Duration = Duration::from_millis(350);

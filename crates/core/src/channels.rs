/// Notification delivery channels as stored in `notifications.channel`.
///
/// Only in-app delivery is implemented; the column exists so external
/// channels can be added without a schema change.
pub const CHANNEL_IN_APP: &str = "in_app";

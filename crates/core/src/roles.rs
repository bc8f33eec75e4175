/// Role names as stored in the `roles` table.
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_PATIENT: &str = "patient";

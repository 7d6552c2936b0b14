//! User-facing Arabic message strings.
//!
//! The portal's audience reads Arabic; log lines and developer-facing
//! errors stay English.

/// Shown when a gateway call is attempted without a bearer token.
pub const MSG_LOGIN_FIRST: &str = "الرجاء تسجيل الدخول أولاً";

/// Generic per-operation failure fallback, used when the backend rejects
/// an operation without supplying its own message.
pub fn op_failed(verb: &str, entity: &str) -> String {
    format!("حدث خطأ أثناء {verb} {entity}")
}

/// Operation verbs for [`op_failed`].
pub mod verb {
    pub const LOAD: &str = "تحميل";
    pub const ADD: &str = "إضافة";
    pub const UPDATE: &str = "تعديل";
    pub const DELETE: &str = "حذف";
    pub const ACCEPT: &str = "قبول";
    pub const REJECT: &str = "رفض";
    pub const EXPORT: &str = "تصدير";
}

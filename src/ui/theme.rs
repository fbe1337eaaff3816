// Fixed user-visible text and banner styles for the contact page
// Strings are Azerbaijani, matching the page markup served alongside this form

// Submit button labels
pub const SUBMIT_LABEL: &str = "Göndər"; // Idle prompt
pub const SENDING_LABEL: &str = "Göndərilir..."; // Shown while a request is in flight

// Banner messages
pub const SUCCESS_TEXT: &str = "Mesaj qəbul olundu!"; // Server accepted the message
pub const FALLBACK_ERROR_TEXT: &str = "Xəta baş verdi."; // Rejected without an `error` field
pub const NETWORK_ERROR_TEXT: &str = "Şəbəkə xətası."; // Request or body parse failed

// Banner style classes
pub const ALERT_SUCCESS_CLASS: &str = "alert success";
pub const ALERT_ERROR_CLASS: &str = "alert error";

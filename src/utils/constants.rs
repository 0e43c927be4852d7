// Element ids shared by the views and their incremental updates

pub const APP_ROOT_ID: &str = "app";

// Auth screen
pub const ROLE_TAB_STUDENT: &str = "role-tab-student";
pub const ROLE_TAB_FACULTY: &str = "role-tab-faculty";
pub const SIGN_IN_TAB: &str = "tab-sign-in";
pub const SIGN_UP_TAB: &str = "tab-sign-up";
pub const LOGIN_FORM: &str = "login-form";
pub const LOGIN_EMAIL: &str = "login-email";
pub const LOGIN_PASSWORD: &str = "login-password";
pub const LOGIN_PASSWORD_TOGGLE: &str = "login-password-toggle";
pub const REGISTER_FORM: &str = "register-form";
pub const REGISTER_ID: &str = "register-id";
pub const REGISTER_NAME: &str = "register-name";
pub const REGISTER_EMAIL: &str = "register-email";
pub const REGISTER_PASSWORD: &str = "register-password";
pub const REGISTER_PASSWORD_TOGGLE: &str = "register-password-toggle";
pub const REGISTER_PHOTO_FIELD: &str = "register-photo-field";
pub const REGISTER_PHOTO: &str = "register-photo";

// Faculty panels
pub const SESSION_LABEL: &str = "session-label";
pub const FACULTY_ID: &str = "faculty-id";
pub const CLASS_PHOTO: &str = "class-photo";
pub const SUMMARY_CARD: &str = "summary-card";
pub const RESULT_CARD: &str = "result-card";
pub const STUDENTS_BODY: &str = "students-body";

// Student panel
pub const ATTENDANCE_PERCENT: &str = "attendance-percent";
pub const ATTENDANCE_CHART: &str = "attendance-chart";
pub const ATTENDANCE_BODY: &str = "attendance-body";

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

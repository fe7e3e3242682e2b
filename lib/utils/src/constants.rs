pub const SECONDS_IN_MINUTE: i64 = 60;
pub const MINUTES_IN_HOUR: i64 = 60;
pub const HOURS_IN_DAY: i64 = 24;
pub const DAYS_IN_MONTH: i64 = 30;
pub const DAYS_IN_YEAR: i64 = 365;


pub const SECONDS_IN_HOUR: i64 = MINUTES_IN_HOUR*SECONDS_IN_MINUTE;
pub const SECONDS_IN_DAY: i64 = HOURS_IN_DAY*SECONDS_IN_HOUR;
pub const SECONDS_IN_MONTH: i64 = DAYS_IN_MONTH*SECONDS_IN_DAY;
pub const SECONDS_IN_YEAR: i64 = DAYS_IN_YEAR*SECONDS_IN_DAY;


pub const DEFAULT_MAX_COMMENT_DEPTH: usize = 5;
pub const LOCAL_COMMENT_ID_PREFIX: &str = "local-";


pub const POST_EXCERPT_LENGTH: usize = 300;
pub const EXCERPT_ELLIPSIS: &str = "...";


pub const HIDE_REPLIES_LABEL: &str = "Hide replies";
pub const NO_COMMENTS_MESSAGE: &str = "No comments yet. Be the first to comment!";
pub const COMMENT_PLACEHOLDER: &str = "What are your thoughts?";
pub const REPLY_PLACEHOLDER: &str = "Write a reply...";
pub const CONTINUE_THREAD_LABEL: &str = "Continue this thread";
pub const JUST_NOW_STR: &str = "just now";

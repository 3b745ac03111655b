use std::env;

use crate::services::enrollment_service::DEFAULT_MAX_CONCURRENT_ENROLLMENTS;

const DEFAULT_COURSE_CAPACITY: usize = 30;

#[derive(Clone)]
pub struct Config {
    pub max_concurrent_enrollments: usize,
    pub default_course_capacity: usize,
    pub profile: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            max_concurrent_enrollments: env::var("REGISTRAR_MAX_LOAD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONCURRENT_ENROLLMENTS),
            default_course_capacity: env::var("REGISTRAR_COURSE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COURSE_CAPACITY),
            profile: env::var("PROFILE").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

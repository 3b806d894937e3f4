//! Common date/time patterns in `chrono` strftime syntax

pub const YYYY: &str = "%Y";
pub const MM: &str = "%m";
pub const DD: &str = "%d";
pub const YYYY_MM_DD: &str = "%Y-%m-%d";
pub const YYYYMMDD: &str = "%Y%m%d";
pub const YYYY_MM: &str = "%Y-%m";
pub const YYYYMM: &str = "%Y%m";
pub const HH_MM_SS: &str = "%H:%M:%S";
pub const HH_MM: &str = "%H:%M";
pub const HHMMSS: &str = "%H%M%S";
pub const YYYY_MM_DD_HH_MM_SS: &str = "%Y-%m-%d %H:%M:%S";
pub const YYYY_MM_DD_HH_MM: &str = "%Y-%m-%d %H:%M";
pub const YYYY_MM_DD_HH_MM_SS_SSS: &str = "%Y-%m-%d %H:%M:%S%.3f";
pub const YYYYSLASHMMSLASHDD_HH_MM_SS: &str = "%Y/%m/%d %H:%M:%S";
pub const YYYYSLASHMMSLASHDD_HH_MM: &str = "%Y/%m/%d %H:%M";
pub const YYYYDOTMMDOTDD_HH_MM_SS: &str = "%Y.%m.%d %H:%M:%S";
pub const YYYYMMDDHHMMSS: &str = "%Y%m%d%H%M%S";
pub const YYYYMMDDHHMM: &str = "%Y%m%d%H%M";
pub const YYYYMMDDHHMMSSSSS: &str = "%Y%m%d%H%M%S%3f";
pub const MM_SLASH_DD: &str = "%m/%d";

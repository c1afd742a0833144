use crate::domain::logging::PlatformKind;
use once_cell::sync::Lazy;

static PLATFORM: Lazy<PlatformKind> = Lazy::new(|| {
    if cfg!(target_os = "ios") {
        PlatformKind::Ios
    } else if cfg!(target_os = "android") {
        PlatformKind::Android
    } else {
        PlatformKind::Web
    }
});

/// Mobile targets run inside the native shell; everything else logs locally.
pub fn platform_kind() -> PlatformKind {
    *PLATFORM
}

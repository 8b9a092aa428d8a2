//! Business-hours check against the clock.

use tracing::debug;

use shopkit_core::BusinessHours;

use crate::collaborators::Clock;

/// True while the clock's local time is inside `hours`.
///
/// ```text
/// 07:59 false │ 08:00 true │ 19:59 true │ 20:00 false
/// ```
pub fn is_online(clock: &dyn Clock, hours: &BusinessHours) -> bool {
    let now = clock.now();
    let online = hours.is_open_at(now.time());
    debug!(%now, open = hours.open_hour, close = hours.close_hour, online, "Checked business hours");
    online
}

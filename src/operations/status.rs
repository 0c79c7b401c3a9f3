use crate::error::Result;
use crate::state::AppStatus;

use super::AppManager;

impl AppManager {
    /// Recorded status for one app, or for every recorded app
    ///
    /// An id with no record falls back to every recorded app.
    pub fn status(&self, app_id: Option<&str>) -> Result<Vec<AppStatus>> {
        if let Some(status) = app_id.map(|id| self.store.get(id)).transpose()?.flatten() {
            return Ok(vec![status]);
        }
        self.store.all()
    }
}

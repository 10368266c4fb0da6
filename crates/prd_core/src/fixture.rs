//! Demo dataset for the dashboard binary and tests.
//!
//! Loading is always an explicit call; `PrdManager` construction never seeds.

use crate::model::catalog::{PrdCategory, PrdStatus};
use crate::model::prd::PrdId;
use crate::repo::prd_repo::PrdRepository;
use crate::service::prd_manager::{ManagerResult, PrdManager};
use log::info;

const DEMO_PRDS: [(&str, &str, &str, PrdCategory); 5] = [
    (
        "User Authentication System",
        "Implement secure login and registration",
        "Dev Team",
        PrdCategory::Feature,
    ),
    (
        "Dark Mode Theme",
        "Add dark theme option for better UX",
        "UX Team",
        PrdCategory::Enhancement,
    ),
    (
        "Payment Gateway Integration",
        "Integrate secure payment processing",
        "Product Team",
        PrdCategory::Feature,
    ),
    (
        "Login Validation Bug",
        "Fix validation error in login form",
        "QA Team",
        PrdCategory::BugFix,
    ),
    (
        "Mobile App Redesign",
        "Complete redesign of mobile application",
        "Design Team",
        PrdCategory::NewProduct,
    ),
];

/// Seeds `manager` with the five demo PRDs and returns their ids in order.
///
/// After creation the 2nd, 3rd and 4th PRDs move to In Review, Approved and
/// Implemented, and the 5th reaches 75% completion.
pub fn load_demo_data<R: PrdRepository>(manager: &mut PrdManager<R>) -> ManagerResult<Vec<PrdId>> {
    let mut ids = Vec::with_capacity(DEMO_PRDS.len());
    for (title, description, author, category) in DEMO_PRDS {
        ids.push(manager.create(title, description, author, category)?);
    }

    manager.update_status(ids[1].as_str(), PrdStatus::InReview)?;
    manager.update_status(ids[2].as_str(), PrdStatus::Approved)?;
    manager.update_status(ids[3].as_str(), PrdStatus::Implemented)?;
    manager.update_completion(ids[4].as_str(), 75)?;

    info!(
        "event=fixture_loaded module=fixture status=ok count={}",
        ids.len()
    );
    Ok(ids)
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render job listings and form chrome from props; page-level
//! orchestration stays in `pages`.

pub mod highlighted;
pub mod job_card;
pub mod job_list;
pub mod password_checklist;

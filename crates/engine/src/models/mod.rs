// Input record types owned by external collaborators (resume parser, job
// store, source fetchers). The engine reads these; it never stores them.

pub mod job;
pub mod resume;
pub mod skills;

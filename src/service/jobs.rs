//! Job endpoints: list, create, partial update. Jobs have no delete — the UI
//! marks them finished instead.

use tokio::time;

use super::{JobPatch, NewJob, CREATE_JOB_DELAY, LIST_JOBS_DELAY, UPDATE_JOB_DELAY};
use crate::error::{ApiError, Result};
use crate::model::{Client, Job, RecordId};
use crate::store::backend::BlobStore;
use crate::store::{bridge, EntityStore};
use crate::validate;

/// Merge persisted state in, then return the full ordered list, finished
/// jobs included.
pub async fn list_all<B: BlobStore>(
    jobs: &mut EntityStore<Job>,
    backend: &B,
) -> Result<Vec<Job>> {
    time::sleep(LIST_JOBS_DELAY).await;
    bridge::load(backend, jobs)?;
    Ok(jobs.records().to_vec())
}

/// Open a new, unfinished job. The client reference must already exist;
/// there is no way to create a job against the unassigned sentinel through
/// this endpoint.
pub async fn create<B: BlobStore>(
    jobs: &mut EntityStore<Job>,
    clients: &EntityStore<Client>,
    backend: &B,
    new: NewJob,
) -> Result<Job> {
    time::sleep(CREATE_JOB_DELAY).await;

    if !validate::client_id_is_valid(clients, new.client_id) {
        return Err(ApiError::UnknownClientForNewJob(new.client_id));
    }

    let id = jobs.allocate();
    let job = Job::new(id, new.technician, new.reason, new.client_id);
    jobs.push(job.clone());
    bridge::save(backend, jobs)?;
    Ok(job)
}

/// Apply a partial update. A supplied `client_id` must validate; every other
/// supplied field is applied unconditionally, and unsupplied fields are left
/// untouched.
pub async fn update<B: BlobStore>(
    jobs: &mut EntityStore<Job>,
    clients: &EntityStore<Client>,
    backend: &B,
    id: RecordId,
    patch: JobPatch,
) -> Result<Job> {
    time::sleep(UPDATE_JOB_DELAY).await;

    let Some(job) = jobs.find_mut(id) else {
        return Err(ApiError::JobNotFound(id));
    };
    if let Some(client_id) = patch.client_id {
        if !validate::client_id_is_valid(clients, client_id) {
            return Err(ApiError::UnknownClientForJobUpdate(client_id));
        }
        job.client_id = client_id;
    }
    if let Some(technician) = patch.technician {
        job.technician = technician;
    }
    if let Some(reason) = patch.reason {
        job.reason = reason;
    }
    if let Some(finished) = patch.finished {
        job.finished = finished;
    }
    let updated = job.clone();

    bridge::save(backend, jobs)?;
    Ok(updated)
}

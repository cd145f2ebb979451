//! Batch and file lifecycle structure

use response_schemas::{BatchResponse, FileResponse};

use crate::expectations::ExpectationSet;
use crate::validator::ValidationOutcome;

use super::check_latency;

/// Single-batch operations must identify the batch
pub fn validate_batch(
    response: &BatchResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    let id = match response {
        BatchResponse::Create(b) | BatchResponse::Retrieve(b) | BatchResponse::Cancel(b) => {
            Some(b.id.as_str())
        }
        BatchResponse::Results(r) => Some(r.batch_id.as_str()),
        BatchResponse::List(_) => None,
    };
    if id == Some("") {
        outcome.fail("Batch ID is empty");
    }

    check_latency(response.extra_fields(), expectations, outcome);
}

/// Single-file operations must identify the file; deletes must be
/// confirmed and downloads non-empty
pub fn validate_file(
    response: &FileResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    match response {
        FileResponse::Upload(f) | FileResponse::Retrieve(f) => require_file_id(&f.id, outcome),
        FileResponse::Delete(d) => {
            require_file_id(&d.id, outcome);
            if !d.deleted {
                outcome.fail("File was not marked as deleted");
            }
        }
        FileResponse::Content(c) => {
            require_file_id(&c.file_id, outcome);
            if c.content.is_empty() {
                outcome.fail("File content is empty");
            }
        }
        FileResponse::List(_) => {}
    }

    check_latency(response.extra_fields(), expectations, outcome);
}

fn require_file_id(id: &str, outcome: &mut ValidationOutcome) {
    if id.is_empty() {
        outcome.fail("File ID is empty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use response_schemas::{
        BatchList, BatchObject, BatchResults, FileContent, FileDeleted, FileObject,
    };

    fn expecting_latency() -> ExpectationSet {
        ExpectationSet {
            should_have_latency: true,
            ..Default::default()
        }
    }

    fn batch(response: &BatchResponse, expectations: &ExpectationSet) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        validate_batch(response, expectations, &mut outcome);
        outcome
    }

    fn file(response: &FileResponse) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        validate_file(response, &ExpectationSet::default(), &mut outcome);
        outcome
    }

    #[test]
    fn batch_without_id_fails() {
        let outcome = batch(
            &BatchResponse::Create(BatchObject::default()),
            &ExpectationSet::default(),
        );
        assert_eq!(outcome.errors(), ["Batch ID is empty"]);

        let outcome = batch(
            &BatchResponse::Results(BatchResults::default()),
            &ExpectationSet::default(),
        );
        assert_eq!(outcome.errors(), ["Batch ID is empty"]);
    }

    #[test]
    fn batch_listing_needs_no_id() {
        let outcome = batch(&BatchResponse::List(BatchList::default()), &ExpectationSet::default());
        assert!(outcome.passed());
    }

    #[test]
    fn batch_latency_must_be_positive() {
        let created = BatchObject {
            id: "batch_1".into(),
            ..Default::default()
        };
        let outcome = batch(&BatchResponse::Cancel(created), &expecting_latency());
        assert_eq!(
            outcome.errors(),
            ["Expected latency information but not present or invalid"]
        );
    }

    #[test]
    fn unconfirmed_delete_fails() {
        let outcome = file(&FileResponse::Delete(FileDeleted {
            id: "file-1".into(),
            deleted: false,
            ..Default::default()
        }));
        assert_eq!(outcome.errors(), ["File was not marked as deleted"]);
    }

    #[test]
    fn empty_download_fails() {
        let outcome = file(&FileResponse::Content(FileContent::default()));
        assert_eq!(outcome.errors(), ["File ID is empty", "File content is empty"]);
    }

    #[test]
    fn uploaded_file_needs_id() {
        let outcome = file(&FileResponse::Upload(FileObject {
            filename: "batch.jsonl".into(),
            ..Default::default()
        }));
        assert_eq!(outcome.errors(), ["File ID is empty"]);
    }
}

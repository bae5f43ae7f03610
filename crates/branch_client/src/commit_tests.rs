use super::*;
use serde_json::from_value;

#[test]
fn test_branch_commit_deserialization() {
    let commit: BranchCommit = from_value(serde_json::json!({
        "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "url": "https://api.github.com/repos/acme/widgets/commits/6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "html_url": "https://github.com/acme/widgets/commit/6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "commit": {
            "message": "Fix the widget assembly line",
            "author": {
                "name": "Monalisa Octocat",
                "email": "mona@example.com",
                "date": "2024-06-11T14:18:34Z"
            },
            "committer": {
                "name": "Monalisa Octocat",
                "email": "mona@example.com",
                "date": "2024-06-11T14:18:34Z"
            }
        }
    }))
    .expect("Failed to deserialize BranchCommit");

    assert_eq!(commit.sha, "6dcb09b5b57875f334f61aebed695e2e4193db5e");
    let detail = commit.commit.expect("commit detail missing");
    assert_eq!(detail.message.as_deref(), Some("Fix the widget assembly line"));
    let author = detail.author.expect("author missing");
    assert_eq!(author.date.as_deref(), Some("2024-06-11T14:18:34Z"));
}

#[test]
fn test_branch_commit_minimal_payload() {
    // list endpoints only carry the sha and url
    let commit: BranchCommit = from_value(serde_json::json!({
        "sha": "c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc",
        "url": "https://api.github.com/repos/acme/widgets/commits/c5b97d5ae6c19d5c5df71a34c7fbeeda2479ccbc"
    }))
    .expect("Failed to deserialize BranchCommit");

    assert!(commit.commit.is_none());
    assert!(commit.html_url.is_none());
}

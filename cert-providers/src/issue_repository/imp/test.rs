use super::in_memory::InMemoryIssueRepository;
use crate::common_models::issue::OpenIssue;
use crate::issue_repository::{model::IssueOrder, IssueRepository};

fn issue(id: i64, user_id: i64, time_created: i64) -> OpenIssue {
    OpenIssue {
        id: id.into(),
        name: format!("Certificate {id}"),
        course_name: None,
        context_id: 1.into(),
        time_created,
        expires: 0,
        code: format!("CODE{id}").into(),
        user_id: user_id.into(),
    }
}

#[tokio::test]
async fn test_fetch_page_orders_newest_first_with_id_tiebreak() {
    let repository = InMemoryIssueRepository::new(vec![
        issue(1, 7, 100),
        issue(2, 7, 300),
        issue(3, 7, 300),
        issue(4, 7, 200),
    ]);

    let page = repository
        .fetch_page(7.into(), 0, 20, IssueOrder::NewestFirst)
        .await
        .unwrap();

    let ids: Vec<i64> = page.into_iter().map(|issue| issue.id.into()).collect();
    assert_eq!(ids, vec![3, 2, 4, 1]);
}

#[tokio::test]
async fn test_fetch_page_filters_by_user_and_applies_window() {
    let repository = InMemoryIssueRepository::new(vec![
        issue(1, 7, 100),
        issue(2, 8, 200),
        issue(3, 7, 300),
        issue(4, 7, 400),
    ]);

    let page = repository
        .fetch_page(7.into(), 1, 1, IssueOrder::NewestFirst)
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 3.into());
}

#[test]
fn test_order_names_match_sql_clause() {
    assert_eq!(IssueOrder::NewestFirst.to_string(), "timecreated DESC, id DESC");
}

#[tokio::test]
async fn test_count_all_counts_only_owned_issues() {
    let repository = InMemoryIssueRepository::default();
    repository.insert(issue(1, 7, 100)).unwrap();
    repository.insert(issue(2, 8, 100)).unwrap();
    repository.insert(issue(3, 7, 100)).unwrap();

    assert_eq!(repository.count_all(7.into()).await.unwrap(), 2);
    assert_eq!(repository.count_all(9.into()).await.unwrap(), 0);
}

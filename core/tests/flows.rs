//! Multi-step flows threading one post id across dependent calls.
//!
//! Each flow is linear: create, read, update, delete. A failed step panics
//! and aborts the remaining steps; there is no cleanup, since the service
//! under test never persists writes.

mod common;

use std::sync::{Arc, Mutex};

use posts_core::{
    fixtures, HttpMethod, NewPost, Post, PostClient, Reporter, RequestRecord, Runner,
};

#[test]
fn post_operations_flow() {
    let (client, runner) = common::start_harness();

    // create
    let input = NewPost {
        title: "Flow Post".to_string(),
        body: "Flow content".to_string(),
        user_id: 1,
    };
    let req = client.build_create_post(&input).unwrap();
    let created = client
        .parse_create_post(runner.execute(&req).unwrap())
        .unwrap();
    let id = created.id;

    // read back the id the service assigned
    let fetched = client
        .parse_get_post(runner.execute(&client.build_get_post(id)).unwrap())
        .unwrap();
    assert_eq!(fetched.title, input.title);

    // update with fresh values
    let update = Post {
        id,
        title: "Updated".to_string(),
        body: "Updated".to_string(),
        user_id: 2,
    };
    let req = client.build_update_post(&update).unwrap();
    let echoed = client
        .parse_update_post(runner.execute(&req).unwrap())
        .unwrap();
    assert_eq!(echoed, update);

    // delete
    client
        .parse_delete_post(runner.execute(&client.build_delete_post(id)).unwrap())
        .unwrap();
}

#[test]
fn create_and_verify_post() {
    let (client, runner) = common::start_harness();

    let input = NewPost {
        title: "New Test Post".to_string(),
        body: "Content of new post".to_string(),
        user_id: 1,
    };
    let req = client.build_create_post(&input).unwrap();
    let created = client
        .parse_create_post(runner.execute(&req).unwrap())
        .unwrap();

    let fetched = client
        .parse_get_post(runner.execute(&client.build_get_post(created.id)).unwrap())
        .unwrap();
    assert_eq!(fetched.title, input.title);
}

#[test]
fn update_and_verify_post() {
    let (client, runner) = common::start_harness();

    let update = Post {
        id: fixtures::existing_post_id(),
        title: "Completely New Title".to_string(),
        body: "Completely new content".to_string(),
        user_id: 999,
    };
    let req = client.build_update_post(&update).unwrap();
    let echoed = client
        .parse_update_post(runner.execute(&req).unwrap())
        .unwrap();
    assert_eq!(echoed, update);
}

#[test]
fn delete_and_verify_post() {
    let (client, runner) = common::start_harness();
    let id = fixtures::existing_post_id();

    client
        .parse_delete_post(runner.execute(&client.build_delete_post(id)).unwrap())
        .unwrap();

    // The service never persists deletes, so the post is still readable.
    let resp = runner.execute(&client.build_get_post(id)).unwrap();
    assert_eq!(resp.status, 200);
}

/// Captures (method, status) pairs from every executed request.
#[derive(Clone, Default)]
struct CollectingReporter {
    records: Arc<Mutex<Vec<(HttpMethod, u16)>>>,
}

impl Reporter for CollectingReporter {
    fn record(&self, record: &RequestRecord) {
        self.records
            .lock()
            .unwrap()
            .push((record.method, record.status));
    }
}

#[test]
fn flow_reports_one_record_per_step() {
    let base_url = common::start_server();
    let client = PostClient::new(&base_url);
    let reporter = CollectingReporter::default();
    let runner = Runner::with_reporter(Box::new(reporter.clone()));

    let input = NewPost {
        title: "Flow Post".to_string(),
        body: "Flow content".to_string(),
        user_id: 1,
    };
    let req = client.build_create_post(&input).unwrap();
    let created = client
        .parse_create_post(runner.execute(&req).unwrap())
        .unwrap();

    runner.execute(&client.build_get_post(created.id)).unwrap();

    let update = Post {
        id: created.id,
        title: "Updated".to_string(),
        body: "Updated".to_string(),
        user_id: 2,
    };
    let req = client.build_update_post(&update).unwrap();
    runner.execute(&req).unwrap();

    runner
        .execute(&client.build_delete_post(created.id))
        .unwrap();

    let records = reporter.records.lock().unwrap();
    assert_eq!(
        *records,
        vec![
            (HttpMethod::Post, 201),
            (HttpMethod::Get, 200),
            (HttpMethod::Put, 200),
            (HttpMethod::Delete, 200),
        ]
    );
}

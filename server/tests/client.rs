//! Full lifecycle through `TodoClient` against a live server.
//!
//! Starts the server on a random port, then drives every client operation
//! over real HTTP using ureq, so request building and response parsing are
//! checked against the actual routes.

use todo_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoError, UpdateTodo,
};
use todo_server::Config;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data rather than `Err` so the client does
/// the status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn spawn_server() -> TodoClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, &Config::default()).await
        })
        .unwrap();
    });

    TodoClient::new(&format!("http://{addr}"))
}

fn create(client: &TodoClient, title: &str) -> u64 {
    let input = CreateTodo {
        title: title.to_string(),
    };
    let req = client.build_create_todo(&input).unwrap();
    client.parse_create_todo(execute(req)).unwrap()
}

#[test]
fn crud_lifecycle() {
    let client = spawn_server();

    // Empty store has no first page.
    let err = client
        .parse_read_todos(execute(client.build_read_todos(0, 10)))
        .unwrap_err();
    assert!(matches!(err, ApiError::Todo(TodoError::TodoNotFoundOnPage(0))));

    let id = create(&client, "Integration test");
    let todos = client
        .parse_read_todos(execute(client.build_read_todos(0, 1)))
        .unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].title, "Integration test");
    assert!(!todos[0].completed);

    // Title and completed.
    let update = UpdateTodo {
        title: "Updated title".to_string(),
        completed: Some(true),
    };
    let req = client.build_update_todo(id, &update).unwrap();
    client.parse_update_todo(execute(req)).unwrap();

    // Title only; completed stays true.
    let update = UpdateTodo {
        title: "Renamed".to_string(),
        completed: None,
    };
    let req = client.build_update_todo(id, &update).unwrap();
    client.parse_update_todo(execute(req)).unwrap();

    let todos = client
        .parse_read_todos(execute(client.build_read_todos(0, 10)))
        .unwrap();
    assert_eq!(todos[0].title, "Renamed");
    assert!(todos[0].completed);

    // Delete twice: both succeed.
    client
        .parse_delete_todo(execute(client.build_delete_todo(id)))
        .unwrap();
    client
        .parse_delete_todo(execute(client.build_delete_todo(id)))
        .unwrap();

    let req = client.build_update_todo(id, &update).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::Todo(TodoError::TodoNotFound(n)) if n == id));

    // Ids keep moving forward after the delete.
    assert!(create(&client, "Next") > id);
}

#[test]
fn pages_walk_the_collection() {
    let client = spawn_server();
    for i in 1..=7 {
        create(&client, &format!("Task {i}"));
    }

    let mut seen = Vec::new();
    for page in 0.. {
        match client.parse_read_todos(execute(client.build_read_todos(page, 3))) {
            Ok(todos) => seen.extend(todos.into_iter().map(|t| t.title)),
            Err(ApiError::Todo(TodoError::TodoNotFoundOnPage(p))) => {
                assert_eq!(p, 3);
                break;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    let expected: Vec<String> = (1..=7).map(|i| format!("Task {i}")).collect();
    assert_eq!(seen, expected);
}

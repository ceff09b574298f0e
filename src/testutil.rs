use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};

/// Serves canned registry responses on a loopback port. The responder maps
/// the `number` query parameter to a JSON body; returning `None` drops the
/// connection without replying, which the client sees as a transport error.
pub fn spawn_api_stub<F>(respond: F) -> String
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|window| window == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }
            let request = String::from_utf8_lossy(&buf).to_string();
            let npi = query_param(&request, "number").unwrap_or_default();
            match respond(&npi) {
                Some(body) => {
                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes());
                }
                None => drop(stream),
            }
        }
    });

    format!("http://{addr}/")
}

/// Base URL whose port was bound and released; connecting to it is refused.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway listener addr");
    drop(listener);
    format!("http://{addr}/")
}

fn query_param(request: &str, name: &str) -> Option<String> {
    let target = request.lines().next()?.split_whitespace().nth(1)?;
    let query = target.split('?').nth(1)?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(&format!("{name}=")))
        .map(|value| value.to_string())
}

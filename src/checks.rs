use rand::Rng;

/// The two hosts under test. Fixed for the life of the run.
pub const HOSTS: [&str; 2] = ["http://foo.localhost", "http://bar.localhost"];

/// Picks one host uniformly at random.
pub fn pick_host<'a, R: Rng>(hosts: &'a [&'a str], rng: &mut R) -> &'a str {
    hosts[rng.gen_range(0..hosts.len())]
}

/// The text each host is expected to serve in its response body.
pub fn expected_text(host: &str) -> &'static str {
    if host.contains("foo") {
        "foo"
    } else {
        "bar"
    }
}

pub fn status_is_200(status: u16) -> bool {
    status == 200
}

pub fn body_contains_expected_text(host: &str, body: &str) -> bool {
    body.contains(expected_text(host))
}

//! Smoke-test and load-test client for the storefront service.

use std::{
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

use clap::Parser;
use rand::{Rng, seq::SliceRandom};
use reqwest::{Client, Method, StatusCode};
use serde_json::{Value, json};
use tokio::{sync::Semaphore, task::JoinSet};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const LOAD_WORKERS: usize = 5;

const SAMPLE_QUERIES: [&str; 5] = [
    "I need a smartphone under $700",
    "Looking for headphones for gaming",
    "Best laptop for students",
    "Coffee mug for office use",
    "Programming books recommendation",
];

#[derive(Debug, Parser)]
#[command(name = "storefront-check")]
#[command(about = "Test the storefront AI service", long_about = None)]
pub struct ClientArgs {
    /// Base URL of the application
    #[arg(long, default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Perform load testing
    #[arg(long)]
    pub load_test: bool,

    /// Number of requests for load testing
    #[arg(long, default_value_t = 20)]
    pub requests: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub endpoint: String,
    pub total: usize,
    pub successful: usize,
    pub duration: Duration,
}

impl LoadReport {
    pub fn failed(&self) -> usize {
        self.total - self.successful
    }

    pub fn requests_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if self.total == 0 || secs == 0.0 {
            return 0.0;
        }
        self.total as f64 / secs
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Load test results for {}:", self.endpoint)?;
        writeln!(f, "   Total requests: {}", self.total)?;
        writeln!(f, "   Successful: {}", self.successful)?;
        writeln!(f, "   Failed: {}", self.failed())?;
        writeln!(f, "   Duration: {:.2}s", self.duration.as_secs_f64())?;
        write!(f, "   RPS: {:.2}", self.requests_per_second())
    }
}

#[derive(Debug, Clone)]
pub struct CheckClient {
    http: Client,
    base_url: String,
}

impl CheckClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request. Returns the JSON body on HTTP 200, `None` on anything else.
    pub async fn check(&self, method: Method, endpoint: &str, body: Option<&Value>) -> Option<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                println!("❌ {method} {endpoint}: {e}");
                return None;
            }
        };

        let status = response.status();
        println!("✅ {method} {endpoint}: {}", status.as_u16());

        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            println!("❌ Error: {text}");
            return None;
        }

        match response.json::<Value>().await {
            Ok(value) => Some(value),
            Err(e) => {
                println!("❌ {method} {endpoint}: {e}");
                None
            }
        }
    }

    /// Fire `requests` copies of one request through a pool of `workers` concurrent slots.
    pub async fn load_test(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        requests: usize,
        workers: usize,
    ) -> LoadReport {
        println!("🔄 Load testing {endpoint} with {requests} requests...");

        let permits = Arc::new(Semaphore::new(workers.max(1)));
        let body = body.map(Arc::new);
        let started = Instant::now();

        let mut tasks = JoinSet::new();
        for _ in 0..requests {
            let client = self.clone();
            let permits = permits.clone();
            let method = method.clone();
            let endpoint = endpoint.to_string();
            let body = body.clone();

            tasks.spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return None;
                };
                client.check(method, &endpoint, body.as_deref()).await
            });
        }

        let mut successful = 0;
        while let Some(joined) = tasks.join_next().await {
            if matches!(joined, Ok(Some(_))) {
                successful += 1;
            }
        }

        let report = LoadReport {
            endpoint: endpoint.to_string(),
            total: requests,
            successful,
            duration: started.elapsed(),
        };
        println!("{report}");
        println!();
        report
    }

    pub async fn run(&self, args: &ClientArgs) {
        println!("🚀 Testing E-commerce OpenLLMetry Application at {}", self.base_url);
        println!("{}", "=".repeat(60));

        println!("1. Health Checks");
        println!("{}", "-".repeat(20));
        for endpoint in ["/", "/health", "/products", "/metrics"] {
            self.check(Method::GET, endpoint, None).await;
        }
        println!();

        println!("2. AI Endpoint Tests");
        println!("{}", "-".repeat(20));
        let recommendation = json!({"query": "I need a laptop for programming", "budget": 1500.0});
        self.check(Method::POST, "/recommendations", Some(&recommendation)).await;
        let chat = json!({"message": "What are your return policies?"});
        self.check(Method::POST, "/chatbot", Some(&chat)).await;
        let search = json!({"query": "electronics"});
        self.check(Method::POST, "/search", Some(&search)).await;
        println!();

        if args.load_test {
            self.run_load_phase(args.requests).await;
        }

        println!("✅ Testing completed!");
        println!();
        let (prometheus, grafana) = dashboard_urls(&self.base_url);
        println!("📊 Check your observability dashboards:");
        println!("   Prometheus: {prometheus}");
        println!("   Grafana: {grafana} (admin/admin)");
    }

    async fn run_load_phase(&self, requests: usize) {
        println!("3. Load Testing");
        println!("{}", "-".repeat(20));

        let share = requests / 4;
        self.load_test(Method::GET, "/", None, share, LOAD_WORKERS).await;
        self.load_test(Method::GET, "/products", None, share, LOAD_WORKERS).await;

        for _ in 0..share {
            let body = random_recommendation_query();
            self.check(Method::POST, "/recommendations", Some(&body)).await;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        println!("Load testing completed!");
    }
}

fn random_recommendation_query() -> Value {
    let mut rng = rand::thread_rng();
    let query = SAMPLE_QUERIES.choose(&mut rng).copied().unwrap_or(SAMPLE_QUERIES[0]);
    let budget: f64 = rng.gen_range(50.0..2000.0);
    json!({"query": query, "budget": budget})
}

/// Prometheus and Grafana URLs assumed to sit next to the service on ports 9090 and 3000.
pub fn dashboard_urls(base_url: &str) -> (String, String) {
    (base_url.replace(":8000", ":9090"), base_url.replace(":8000", ":3000"))
}

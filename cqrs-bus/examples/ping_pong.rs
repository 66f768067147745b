use cqrs_bus::{
    AppError, Command, CommandBus, Handler, HandlerRegistry, HandlerResolver, Query, QueryBus,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Command)]
#[command(output = String)]
#[handled_by(PingHandler)]
struct Ping {
    from: String,
}

#[derive(Debug, Query)]
#[query(output = usize)]
#[handled_by(PingCountHandler)]
struct PingCount;

// 未声明处理器，分发时会报错
#[derive(Debug, Command)]
struct Shout;

struct PingHandler {
    pings: Arc<AtomicUsize>,
}

impl Handler<Ping> for PingHandler {
    fn handle(&self, cmd: Ping) -> Result<String, AppError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        Ok(format!("pong -> {}", cmd.from))
    }
}

struct PingCountHandler {
    pings: Arc<AtomicUsize>,
}

impl Handler<PingCount> for PingCountHandler {
    fn handle(&self, _q: PingCount) -> Result<usize, AppError> {
        Ok(self.pings.load(Ordering::SeqCst))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 通过 CQRS_LOG 控制日志级别，例如 CQRS_LOG=debug
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("CQRS_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pings = Arc::new(AtomicUsize::new(0));
    let registry = HandlerRegistry::new();
    {
        let pings = pings.clone();
        registry.register::<Ping, _, _>("PingHandler", move || PingHandler {
            pings: pings.clone(),
        })?;
    }
    registry.register_shared::<PingCount, _>(
        "PingCountHandler",
        Arc::new(PingCountHandler {
            pings: pings.clone(),
        }),
    )?;

    let resolver: Arc<dyn HandlerResolver> = Arc::new(registry);
    let commands = CommandBus::from_arc(resolver.clone());
    let queries = QueryBus::from_arc(resolver);

    for from in ["alice", "bob"] {
        let reply = commands.handle(Ping { from: from.into() })?;
        println!("{reply}");
    }
    println!("pings so far: {}", queries.handle(PingCount)?);

    if let Err(err) = commands.handle(Shout) {
        eprintln!("rejected as expected: {err}");
    }
    Ok(())
}

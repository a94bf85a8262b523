use tandem_engine::device::GpuInit;
use tandem_engine::logging::{init_logging, LoggingConfig};
use tandem_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("starting: event thread waits on input, render thread draws");

    Runtime::run(RuntimeConfig::default(), GpuInit::default())
}

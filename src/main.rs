use anyhow::Context;

use nanokontrol2::{
    transport::{Transport, DEVICE_PORT_HINT},
    Surface,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("Error: {err:#}");
        std::process::exit(1);
    }

    log::info!("Exiting");
}

fn run() -> anyhow::Result<()> {
    let (mut transport, cc_rx) = Transport::try_new("nk2 monitor")?;

    let port_name = transport
        .connect_matching(DEVICE_PORT_HINT)
        .with_context(|| {
            let ports: Vec<_> = transport.ports().collect();
            format!("available input ports: {ports:?}")
        })?;
    log::info!("Monitoring {port_name}");

    let mut surface = Surface::new();
    for id in surface.control_ids().collect::<Vec<_>>() {
        surface.control_mut(id).set_on_change(|ctrl| {
            if ctrl.is_pressed() {
                log::info!("{} pressed", ctrl.name());
            } else if ctrl.is_released() {
                log::info!("{} released", ctrl.name());
            } else {
                log::info!(
                    "{} -> {} ({:.1}%)",
                    ctrl.name(),
                    ctrl.value(),
                    ctrl.percentage() * 100.0,
                );
            }
        });
    }

    // Single writer: this loop is the only caller of dispatch, fed in
    // arrival order by the transport's channel.
    for cc in cc_rx {
        surface.dispatch(cc.controller, cc.value);
    }

    Ok(())
}

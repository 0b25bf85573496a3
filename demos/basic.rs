use tessera::{Chat, EventBus, LogicalSide, OverlayKind, Priority, TokenRegistry, ToolType};

fn main() {
    tessera::init_logging();

    let registry = TokenRegistry::new();
    let builtins = ToolType::register_builtins(&registry).expect("builtin names are valid");
    println!("builtins: {:?}", builtins);

    match registry.get_or_create("Pickaxe") {
        Ok(t) => println!("unexpected token {t}"),
        Err(e) => println!("rejected: {e}"),
    }

    let bus = EventBus::new(LogicalSide::Client);
    bus.subscribe(OverlayKind::Chat, Priority::Normal, |d| {
        if let Some(chat) = d.event_mut().as_chat_mut() {
            chat.pos_y -= 20;
        }
    });
    let out = bus.publish(Chat { pos_x: 2, pos_y: 200 });
    println!("chat overlay moved: {:?}", out.event());
}

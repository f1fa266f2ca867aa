use clap::Parser;
use syncproxy_rpc::{
    AccessorConfig, CollectionCheck, Image, NumericCoercion, ParameterStore, SendLocation,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
struct Args {
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    /// Repeat for each address line
    #[arg(short, long = "address")]
    address_lines: Vec<String>,
    #[arg(short, long)]
    phone: Option<String>,
    /// Uploaded file to use as the location icon
    #[arg(short, long)]
    image: Option<String>,
    #[arg(short, long)]
    correlation_id: Option<i64>,
    /// Decode this JSON envelope instead of building one from the flags
    #[arg(long)]
    decode: Option<String>,
    /// Reject integer coordinates and mixed address lists when decoding
    #[arg(long)]
    strict: bool,
    #[arg(long)]
    debug: bool,
}

fn init_logger(debug: bool) {
    let filter = if debug {
        EnvFilter::new("syncproxy_rpc=trace")
    } else {
        EnvFilter::new("syncproxy_rpc=warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn build(args: &Args) -> SendLocation {
    let mut msg = SendLocation::new();
    msg.set_correlation_id(args.correlation_id);
    msg.set_latitude_degrees(args.lat);
    msg.set_longitude_degrees(args.lon);
    msg.set_location_name(args.name.clone());
    msg.set_location_description(args.description.clone());
    if !args.address_lines.is_empty() {
        msg.set_address_lines(Some(args.address_lines.clone()));
    }
    msg.set_phone_number(args.phone.clone());
    msg.set_location_image(args.image.as_deref().map(Image::dynamic));
    msg
}

fn describe(msg: &SendLocation) {
    println!("function:    {}", msg.function_name());
    println!("correlation: {:?}", msg.correlation_id());
    println!("latitude:    {:?}", msg.latitude_degrees());
    println!("longitude:   {:?}", msg.longitude_degrees());
    println!("name:        {:?}", msg.location_name());
    println!("description: {:?}", msg.location_description());
    println!("address:     {:?}", msg.address_lines());
    println!("phone:       {:?}", msg.phone_number());
    match msg.location_image() {
        Some(image) => println!("image:       {:?} ({:?})", image.value(), image.image_type()),
        None => println!("image:       None"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(args.debug);

    match &args.decode {
        Some(json) => {
            let store: ParameterStore = serde_json::from_str(json)?;
            let config = if args.strict {
                AccessorConfig::default()
                    .with_numeric(NumericCoercion::Strict)
                    .with_collections(CollectionCheck::AllElements)
            } else {
                AccessorConfig::default()
            };
            let msg = SendLocation::from_store(store).with_config(config);
            describe(&msg);
        }
        None => {
            let msg = build(&args);
            println!("{}", serde_json::to_string_pretty(&msg.to_store())?);
        }
    }
    Ok(())
}

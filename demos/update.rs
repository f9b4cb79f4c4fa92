use std::net::Ipv4Addr;

use dnsupdate::dns_parser::{Class, Name, RRData, ResourceRecord};
use dnsupdate::UpdateMessage;

pub fn main() -> Result<(), dnsupdate::Error> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters("dnsupdate=trace");
    builder.init();

    let host = ResourceRecord::new(
        Name::from_str("host.example.com")?,
        Class::IN,
        300,
        RRData::A(Ipv4Addr::new(192, 0, 2, 10)),
    );

    // add host.example.com only if the name is still free
    let mut update = UpdateMessage::new(Name::from_str("example.com")?, Class::IN);
    update.name_is_not_in_use(vec![host.clone()]);
    update.push_update(host)?;

    let packet = update.to_wire()?;
    let hex: Vec<String> = packet.iter().map(|byte| format!("{:02x}", byte)).collect();
    println!("{}", hex.join(" "));
    Ok(())
}

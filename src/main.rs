use thingful_rs::{BoundingBox, ThingfulError, create_client};

#[tokio::main]
async fn main() -> Result<(), ThingfulError> {
    let mut client = create_client();
    let bounds = BoundingBox::new(51.15, 0.1, 51.30, 0.3);

    println!("Searching Thingful for 'temperature'...");
    client.query("temperature", bounds).await?;
    println!("Got {} things", client.things.len());

    for thing in &client.things {
        println!(
            "{}: {} ({} channels)",
            thing.id,
            thing.title.as_deref().unwrap_or("untitled"),
            thing.data.len()
        );
    }

    if client.next_page.is_some() {
        println!("Fetching next page...");
        client.next().await?;
        println!("Got {} more things", client.things.len());
    } else {
        eprintln!("No more pages");
    }

    Ok(())
}

pub mod client;
pub mod error;

pub use client::{
    AccumulateArgs, Attributes, BoundingBox, Channel, ChannelData, HttpClient, Links, RawThing,
    Thing, ThingfulClient, ThingsResponse,
};
pub use error::ThingfulError;

/// Creates a new [`ThingfulClient`] session for making queries against the
/// Thingful API.
pub fn create_client() -> ThingfulClient {
    ThingfulClient::new()
}

#[cfg(test)]
mod tests {
    use crate::{AccumulateArgs, BoundingBox, ThingfulError, create_client};

    fn bounds() -> BoundingBox {
        BoundingBox::new(51.15, 0.1, 51.30, 0.3)
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_query_then_page_then_accumulate() -> Result<(), ThingfulError> {
        let mut client = create_client();

        // Run a simple query and check the session got populated.
        client.query("temperature", bounds()).await?;
        assert_eq!(client.current_query.as_deref(), Some("temperature"));
        assert!(client.current_page.is_some());
        println!("Got {} things", client.things.len());

        // Page once if the API says there is more.
        if client.next_page.is_some() {
            let second_page = client.next_page.clone();
            client.next().await?;
            assert_eq!(client.current_page, second_page);
        }

        // Accumulate across pages, one thing per page.
        let mut accumulator = create_client();
        accumulator
            .next_page_until_amount(
                AccumulateArgs::new(3)
                    .with_query("humidity")
                    .with_bounds(bounds())
                    .with_unit("%"),
            )
            .await?;
        assert!(accumulator.things.len() >= 3 || accumulator.next_page.is_none());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_manually_configured_session_executes() -> Result<(), ThingfulError> {
        let mut client = create_client();
        client.current_query = Some("temperature".to_string());
        client.bounds = Some(bounds());

        client.execute(false).await?;
        assert!(client.current_page.is_some());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_empty_result_page() -> Result<(), ThingfulError> {
        let mut client = create_client();
        client.query("NO_RESULTS_TEST123123", bounds()).await?;

        assert!(client.things.is_empty());
        assert!(client.next_page.is_none());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_concurrent_sessions_stay_independent() -> Result<(), ThingfulError> {
        let mut first = create_client();
        let mut second = create_client();

        futures::future::try_join(
            first.query("temperature", bounds()),
            second.query("pollution", bounds()),
        )
        .await?;

        assert_eq!(first.current_query.as_deref(), Some("temperature"));
        assert_eq!(second.current_query.as_deref(), Some("pollution"));
        Ok(())
    }
}

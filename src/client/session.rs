use crate::client::thing::{Thing, ThingsResponse};
use crate::client::types::{AccumulateArgs, BoundingBox, HttpClient};
use crate::error::ThingfulError;

/// A query session against the Thingful search API.
///
/// The session is mutated in place by every operation: a successful fetch
/// replaces `things` and updates the pagination cursors, so the same value
/// can be re-run, advanced with [`next`](Self::next), or driven across pages
/// with [`next_page_until_amount`](Self::next_page_until_amount). Distinct
/// sessions are fully independent; within one session, operations take
/// `&mut self` and must not overlap.
pub struct ThingfulClient {
    http: HttpClient,
    pub things: Vec<Thing>,
    pub limit: u32,
    pub bounds: Option<BoundingBox>,
    pub current_query: Option<String>,
    /// Cursor URL of the page currently held in `things`.
    pub current_page: Option<String>,
    /// Cursor URL of the following page; `None` once exhausted.
    pub next_page: Option<String>,
}

impl ThingfulClient {
    const BASE_URL: &'static str = "https://api.thingful.net/things";
    const DEFAULT_LIMIT: u32 = 10;

    pub fn new() -> Self {
        Self {
            http: HttpClient::new(),
            things: Vec::new(),
            limit: Self::DEFAULT_LIMIT,
            bounds: None,
            current_query: None,
            current_page: None,
            next_page: None,
        }
    }

    /// Stores `query` and `bounds` on the session and runs the search.
    ///
    /// Rejects with [`ThingfulError::InvalidQuery`] for an empty query and
    /// [`ThingfulError::InvalidBounds`] for non-finite bounds, in both cases
    /// before any network I/O and without touching session state.
    pub async fn query(
        &mut self,
        query: &str,
        bounds: BoundingBox,
    ) -> Result<&mut Self, ThingfulError> {
        if query.is_empty() {
            return Err(ThingfulError::InvalidQuery);
        }
        if !bounds.is_valid() {
            return Err(ThingfulError::InvalidBounds);
        }

        self.current_query = Some(query.to_string());
        self.bounds = Some(bounds);

        self.execute(false).await
    }

    /// Runs a request from the values currently stored on the session.
    ///
    /// With `execute_current_page` set and a current cursor present, the
    /// cursor URL is fetched verbatim (it already encodes query, bounds and
    /// limit). Otherwise a fresh URL is built from `current_query`, `bounds`
    /// and `limit`, failing with [`ThingfulError::MissingQuery`] or
    /// [`ThingfulError::InvalidBounds`] when those are unset.
    pub async fn execute(
        &mut self,
        execute_current_page: bool,
    ) -> Result<&mut Self, ThingfulError> {
        let url = match (&self.current_page, execute_current_page) {
            (Some(cursor), true) => cursor.clone(),
            _ => self.build_url()?,
        };

        let response: ThingsResponse = self.http.fetch_json(&url).await?;
        self.apply_page(response);

        Ok(self)
    }

    /// Moves the session to the next page and re-runs the query.
    ///
    /// When no next page exists, this falls through to the same fresh-URL
    /// path as [`execute`](Self::execute); there is no dedicated
    /// "no more pages" signal.
    pub async fn next(&mut self) -> Result<&mut Self, ThingfulError> {
        self.current_page = self.next_page.clone();
        self.execute(true).await
    }

    /// Pages through results one thing at a time until `args.amount`
    /// matching things have been collected or the cursor is exhausted,
    /// then stores the accumulated things on the session.
    ///
    /// Session query and bounds are overwritten from `args` on every
    /// iteration, even when unset there, and `limit` is forced to 1.
    pub async fn next_page_until_amount(
        &mut self,
        args: AccumulateArgs,
    ) -> Result<&mut Self, ThingfulError> {
        let amount = args.amount.ok_or(ThingfulError::MissingArgs)?;
        let mut accumulated: Vec<Thing> = Vec::new();

        loop {
            // Re-validated on every pass, matching the per-page shape of
            // the pagination loop.
            if args.query.is_none() && self.current_query.is_none() {
                return Err(ThingfulError::MissingQuery);
            }
            if args.bounds.is_none() && self.bounds.is_none() {
                return Err(ThingfulError::MissingBounds);
            }

            self.current_query = args.query.clone();
            self.bounds = args.bounds;
            self.limit = 1;

            self.next().await?;

            accumulated.extend(
                self.things
                    .iter()
                    .filter(|thing| matches_unit(thing, args.unit.as_deref()))
                    .cloned(),
            );

            if accumulated.len() >= amount || self.next_page.is_none() {
                self.things = accumulated;
                return Ok(self);
            }
        }
    }

    fn build_url(&self) -> Result<String, ThingfulError> {
        let query = self
            .current_query
            .as_deref()
            .ok_or(ThingfulError::MissingQuery)?;
        let bounds = self.bounds.ok_or(ThingfulError::InvalidBounds)?;
        if !bounds.is_valid() {
            return Err(ThingfulError::InvalidBounds);
        }

        Ok(format!(
            "{}?geobound-minlong={}&geobound-maxlong={}&geobound-minlat={}&geobound-maxlat={}&limit={}&q={}",
            Self::BASE_URL,
            bounds.min_lon,
            bounds.max_lon,
            bounds.min_lat,
            bounds.max_lat,
            self.limit,
            urlencoding::encode(query)
        ))
    }

    fn apply_page(&mut self, response: ThingsResponse) {
        self.current_page = Some(response.links.current);
        self.next_page = response.links.next;
        self.things = response.data.into_iter().map(Thing::from).collect();
    }
}

impl Default for ThingfulClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The unit comparison is inert: any thing carrying at least one channel
/// entry matches, whatever unit was asked for. Things without channels
/// never match. Tightening this to a real unit filter changes how many
/// pages `next_page_until_amount` walks (see DESIGN.md).
fn matches_unit(thing: &Thing, _unit: Option<&str>) -> bool {
    !thing.data.is_empty()
}

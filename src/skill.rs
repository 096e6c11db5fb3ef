//! Turn handling: routes a platform request to the matching handler and
//! builds the response envelope.

use crate::location_resolver::{LocationLookup, LocationResolver};
use crate::models::{
    Intent, LocationTable, Request, SessionAttributes, SkillRequest, SkillResponse, Speechlet,
};
use crate::speech::ForecastRenderer;
use crate::weather::ForecastFetcher;
use crate::{Result, SkillError};
use std::str::FromStr;
use tracing::{error, info, instrument};

const LOCATION_SLOT: &str = "Location";

/// Intents this skill understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    /// `getWeatherIntent`: speak the forecast for a named location
    WeatherLookup,
    /// `getHelpIntent`: list the locations the skill knows about
    Help,
}

impl FromStr for IntentKind {
    type Err = SkillError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "getWeatherIntent" => Ok(IntentKind::WeatherLookup),
            "getHelpIntent" => Ok(IntentKind::Help),
            other => Err(SkillError::unknown_intent(other)),
        }
    }
}

/// The weather skill: known locations, a renderer and a forecast source
pub struct Skill {
    resolver: LocationResolver,
    renderer: ForecastRenderer,
    fetcher: Box<dyn ForecastFetcher>,
    default_location: String,
}

impl Skill {
    /// Create the skill.
    ///
    /// Fails when the default location spoken on launch is not a known
    /// location.
    pub fn new(
        locations: LocationTable,
        renderer: ForecastRenderer,
        fetcher: impl ForecastFetcher + 'static,
        default_location: &str,
    ) -> Result<Self> {
        let default_location = default_location.trim().to_lowercase();
        if !locations.contains(&default_location) {
            return Err(SkillError::config(format!(
                "Default location '{default_location}' is not in the locations table"
            )));
        }

        Ok(Self {
            resolver: LocationResolver::new(locations),
            renderer,
            fetcher: Box::new(fetcher),
            default_location,
        })
    }

    /// Handle one turn.
    ///
    /// Returns `None` for a session-ended notification, which needs no reply.
    #[instrument(name = "turn", skip_all, fields(session_id = %request.session.session_id))]
    pub fn handle(&self, request: SkillRequest) -> Result<Option<SkillResponse>> {
        let SkillRequest { session, request } = request;

        info!(
            "event.session.application.applicationId={}",
            session.application.application_id
        );

        if session.new {
            info!(
                "on_session_started requestId={}, sessionId={}",
                request.request_id(),
                session.session_id
            );
        }

        let attributes = session.attributes.unwrap_or_default();

        match request {
            Request::LaunchRequest { request_id } => {
                info!("on_launch requestId={}", request_id);
                self.welcome().map(Some)
            }
            Request::IntentRequest { request_id, intent } => {
                info!("on_intent requestId={} intent={}", request_id, intent.name);
                match intent.name.parse::<IntentKind>()? {
                    IntentKind::WeatherLookup => {
                        self.weather_in_session(&intent, attributes).map(Some)
                    }
                    IntentKind::Help => Ok(Some(self.help())),
                }
            }
            Request::SessionEndedRequest { request_id, reason } => {
                info!(
                    "on_session_ended requestId={} reason={}",
                    request_id,
                    reason.as_deref().unwrap_or("unspecified")
                );
                Ok(None)
            }
        }
    }

    /// Handle one turn, turning a failed turn into an apology that ends the
    /// session
    pub fn respond(&self, request: SkillRequest) -> Option<SkillResponse> {
        match self.handle(request) {
            Ok(response) => response,
            Err(e) => {
                error!("Turn failed: {}", e);
                Some(SkillResponse::error(&e))
            }
        }
    }

    /// Fresh forecast for the default location; ends the session
    pub fn welcome(&self) -> Result<SkillResponse> {
        let coordinates = self
            .resolver
            .locations()
            .coordinates(&self.default_location)
            .ok_or_else(|| {
                SkillError::config(format!(
                    "Unknown default location '{}'",
                    self.default_location
                ))
            })?;

        let forecast = self.fetcher.fetch(coordinates)?;
        let weather = self.renderer.render_at(&self.default_location, &forecast)?;

        let mut attributes = SessionAttributes::new();
        attributes.store_forecast(&forecast);

        Ok(SkillResponse::new(
            attributes,
            Speechlet::new("Welcome", &weather, "", true),
        ))
    }

    /// Forecast for the location named in the intent's slot.
    ///
    /// When the location is missing or unknown the cached forecast is
    /// cleared.
    pub fn weather_in_session(
        &self,
        intent: &Intent,
        mut attributes: SessionAttributes,
    ) -> Result<SkillResponse> {
        let weather = match self.resolver.resolve(intent.slot_value(LOCATION_SLOT)) {
            LocationLookup::Missing => {
                attributes.clear_forecast();
                "I do not know the location you asked about. ".to_string()
            }
            LocationLookup::Unknown { name } => {
                attributes.clear_forecast();
                format!("Oops, somebody forgot to tell me where {name} is located. ")
            }
            LocationLookup::Known { name, coordinates } => {
                let forecast = self
                    .resolver
                    .forecast(coordinates, &attributes, self.fetcher.as_ref())?;
                let weather = self.renderer.render_at(&name, &forecast)?;
                attributes.store_forecast(&forecast);
                weather
            }
        };

        Ok(SkillResponse::new(
            attributes,
            Speechlet::new(&intent.name, &weather, "", false),
        ))
    }

    /// List the known locations; the session attributes are reset
    #[must_use]
    pub fn help(&self) -> SkillResponse {
        let text = help_text(self.resolver.locations().names());
        SkillResponse::new(
            SessionAttributes::new(),
            Speechlet::new("getHelp", &text, "", false),
        )
    }
}

/// Help sentence listing location names, e.g.
/// `"You can ask me for the weather in cabin, home, and work. "`
pub fn help_text<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    match names.as_slice() {
        [] => "I do not know about any locations yet. ".to_string(),
        [only] => format!("You can ask me for the weather in {only}. "),
        [leading @ .., last] => format!(
            "You can ask me for the weather in {}, and {last}. ",
            leading.join(", ")
        ),
    }
}

//! Resident and admin actions
//!
//! One method per user action. Each performs at most the round trips the
//! action needs and replaces the affected collection in [`AppState`].
//! Calls that need a session fail with [`ClientError::NotLoggedIn`] before
//! anything is sent.

use chrono::{NaiveDate, NaiveTime};
use shared::classifier::{
    amenity_name, build_booking_request, build_display_state, capacity_in_mode, classify,
    resolve_day_basedness,
};
use shared::client::{AuthResponse, LoginRequest, RegisterRequest};
use shared::models::{AdminBooking, AdminStats, Amenity, AvailabilityResponse, Booking};

use crate::error::AuthAction;
use crate::http::{HttpClient, NetworkHttpClient, Service};
use crate::state::{AppState, AvailabilityView, BookingOutcome, Session};
use crate::{ClientConfig, ClientError, ClientResult};

/// Booking portal: HTTP client plus application state
#[derive(Debug)]
pub struct Portal<C = NetworkHttpClient> {
    http: C,
    state: AppState,
}

impl Portal<NetworkHttpClient> {
    /// Create a portal talking to the services named in `config`
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_client(config.build_http_client()?))
    }
}

impl<C: HttpClient> Portal<C> {
    pub fn with_client(http: C) -> Self {
        Self {
            http,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    fn require_session(&self) -> ClientResult<()> {
        if self.state.token().is_none() {
            return Err(ClientError::NotLoggedIn);
        }
        Ok(())
    }

    fn require_admin(&mut self) -> ClientResult<()> {
        self.require_session()?;
        if !self.state.is_admin() {
            tracing::warn!("admin view requested without admin role");
            self.state.deny_admin();
            return Err(ClientError::AccessDenied);
        }
        Ok(())
    }

    /// Record a server-side 403 on an admin call
    fn on_admin_error(&mut self, err: &ClientError) {
        if matches!(err, ClientError::Forbidden(_)) {
            tracing::warn!("admin access denied by server");
            self.state.deny_admin();
        }
    }

    // ========== Auth ==========

    /// Log in and load the resident's bookings
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self
            .http
            .post(Service::User, "/api/login", &request)
            .await
            .map_err(|e| e.into_auth_failure(AuthAction::Login))?;
        Ok(self.start_session(resp).await)
    }

    /// Register a resident and log them in
    pub async fn register(&mut self, request: &RegisterRequest) -> ClientResult<Session> {
        let resp: AuthResponse = self
            .http
            .post(Service::User, "/api/register", request)
            .await
            .map_err(|e| e.into_auth_failure(AuthAction::Registration))?;
        Ok(self.start_session(resp).await)
    }

    async fn start_session(&mut self, resp: AuthResponse) -> Session {
        let session = Session::from(resp);
        tracing::info!(username = %session.username, role = %session.role, "logged in");
        self.http.set_token(Some(session.token.clone()));
        self.state.clear_session();
        self.state.session = Some(session.clone());

        if let Err(e) = self.load_bookings().await {
            tracing::warn!(error = %e, "failed to load bookings after login");
        }
        session
    }

    /// Forget the session locally
    pub fn logout(&mut self) {
        if let Some(session) = &self.state.session {
            tracing::info!(username = %session.username, "logged out");
        }
        self.http.set_token(None);
        self.state.clear_session();
    }

    // ========== Amenities and availability ==========

    /// Load the amenity list, replacing the previous one
    pub async fn load_amenities(&mut self) -> ClientResult<&[Amenity]> {
        let amenities: Vec<Amenity> = self.http.get(Service::Amenity, "/api/amenities").await?;
        tracing::debug!(count = amenities.len(), "amenities loaded");
        self.state.amenities = amenities;
        Ok(&self.state.amenities)
    }

    /// Fetch availability and derive what to show for it
    pub async fn load_availability(
        &mut self,
        amenity_id: i64,
        date: NaiveDate,
    ) -> ClientResult<AvailabilityView> {
        let query = [
            ("amenityId", amenity_id.to_string()),
            ("date", date.to_string()),
        ];
        let response: AvailabilityResponse = self
            .http
            .get_with_query(Service::Booking, "/api/availability", &query)
            .await?;

        let view = self.availability_view(amenity_id, date, &response);
        self.state.availability = Some(view.clone());
        Ok(view)
    }

    fn availability_view(
        &self,
        amenity_id: i64,
        date: NaiveDate,
        response: &AvailabilityResponse,
    ) -> AvailabilityView {
        let amenities = &self.state.amenities;
        let category = classify(amenity_id, amenities);
        let day_based = resolve_day_basedness(category, response.is_day_based);
        tracing::debug!(
            amenity_id,
            %category,
            api_day_based = ?response.is_day_based,
            day_based,
            "resolved availability mode"
        );

        AvailabilityView {
            amenity_id,
            amenity_name: amenity_name(amenity_id, amenities),
            date,
            category,
            capacity: capacity_in_mode(category, day_based),
            display: build_display_state(response, category),
        }
    }

    /// Re-fetch availability after a booking change, logging failures
    async fn refresh_availability(
        &mut self,
        amenity_id: i64,
        date: NaiveDate,
    ) -> Option<AvailabilityView> {
        match self.load_availability(amenity_id, date).await {
            Ok(view) => Some(view),
            Err(e) => {
                tracing::warn!(amenity_id, %date, error = %e, "failed to refresh availability");
                None
            }
        }
    }

    // ========== Bookings ==========

    /// Book a day (day-based amenities) or the hour starting at `time`
    ///
    /// A 409 is not an error: the outcome carries the server's message and
    /// fresh availability so the resident can pick again.
    pub async fn book(
        &mut self,
        amenity_id: i64,
        date: NaiveDate,
        time: Option<NaiveTime>,
    ) -> ClientResult<BookingOutcome> {
        self.require_session()?;

        let category = classify(amenity_id, &self.state.amenities);
        let request = build_booking_request(amenity_id, category, date, time)
            .map_err(|e| ClientError::InvalidInput(e.to_string()))?;

        let result: ClientResult<Booking> = self
            .http
            .post(Service::Booking, "/api/bookings", &request)
            .await;
        match result {
            Ok(booking) => {
                tracing::info!(
                    booking_id = booking.id,
                    amenity_id,
                    %category,
                    %date,
                    "booking created"
                );
                let availability = self.refresh_availability(amenity_id, date).await;
                if let Err(e) = self.load_bookings().await {
                    tracing::warn!(error = %e, "failed to reload bookings");
                }
                Ok(BookingOutcome::Created {
                    booking,
                    availability,
                })
            }
            Err(ClientError::Conflict(message)) => {
                tracing::info!(amenity_id, %date, %message, "booking conflict");
                let availability = self.refresh_availability(amenity_id, date).await;
                Ok(BookingOutcome::Conflict {
                    message,
                    availability,
                })
            }
            Err(e) => {
                tracing::warn!(amenity_id, %date, error = %e, "booking failed");
                Err(e)
            }
        }
    }

    /// Load the resident's bookings, replacing the previous list
    pub async fn load_bookings(&mut self) -> ClientResult<&[Booking]> {
        self.require_session()?;
        let bookings: Vec<Booking> = self.http.get(Service::Booking, "/api/bookings").await?;
        self.state.bookings = bookings;
        Ok(&self.state.bookings)
    }

    /// Cancel a booking, then reload bookings and the shown availability
    pub async fn cancel_booking(&mut self, booking_id: i64) -> ClientResult<()> {
        self.require_session()?;
        self.http
            .delete(Service::Booking, &format!("/api/bookings/{booking_id}"))
            .await?;
        tracing::info!(booking_id, "booking cancelled");

        if let Some((amenity_id, date)) = self
            .state
            .availability
            .as_ref()
            .map(|v| (v.amenity_id, v.date))
        {
            self.refresh_availability(amenity_id, date).await;
        }
        if let Err(e) = self.load_bookings().await {
            tracing::warn!(error = %e, "failed to reload bookings");
        }
        Ok(())
    }

    // ========== Admin ==========

    /// Open the admin dashboard and load every booking
    pub async fn show_admin_dashboard(&mut self) -> ClientResult<&[AdminBooking]> {
        self.require_admin()?;
        self.state.admin_dashboard_visible = true;
        self.load_all_bookings().await
    }

    /// Load all residents' bookings
    pub async fn load_all_bookings(&mut self) -> ClientResult<&[AdminBooking]> {
        self.require_admin()?;
        let result: ClientResult<Vec<AdminBooking>> =
            self.http.get(Service::Booking, "/api/admin/bookings").await;
        match result {
            Ok(bookings) => {
                self.state.admin_bookings = bookings;
                Ok(&self.state.admin_bookings)
            }
            Err(e) => {
                self.on_admin_error(&e);
                Err(e)
            }
        }
    }

    /// Load aggregate statistics
    pub async fn load_admin_stats(&mut self) -> ClientResult<&AdminStats> {
        self.require_admin()?;
        let result: ClientResult<AdminStats> =
            self.http.get(Service::Booking, "/api/admin/stats").await;
        match result {
            Ok(stats) => {
                if !stats.bookings.is_empty() {
                    self.state.admin_bookings = stats.bookings.clone();
                }
                Ok(self.state.admin_stats.insert(stats))
            }
            Err(e) => {
                self.on_admin_error(&e);
                Err(e)
            }
        }
    }

    /// Show bookings of one amenity, or all bookings when `None`
    pub async fn filter_admin_bookings(
        &mut self,
        amenity_id: Option<i64>,
    ) -> ClientResult<&[AdminBooking]> {
        let Some(amenity_id) = amenity_id else {
            return self.load_all_bookings().await;
        };
        self.require_admin()?;

        let path = format!("/api/admin/bookings/amenity/{amenity_id}");
        let result: ClientResult<Vec<AdminBooking>> = self.http.get(Service::Booking, &path).await;
        match result {
            Ok(bookings) => {
                self.state.admin_bookings = bookings;
                Ok(&self.state.admin_bookings)
            }
            Err(e) => {
                self.on_admin_error(&e);
                if matches!(e, ClientError::Forbidden(_)) {
                    self.state.admin_bookings.clear();
                }
                Err(e)
            }
        }
    }
}

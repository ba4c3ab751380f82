use serde_json::json;
use store::KeyValueStore;

use crate::error::ApiError;
use crate::gateway::{Gateway, Navigator};
use crate::models::{Reservation, ReservationRequest, ReservationStatus};
use crate::transport::Transport;
use crate::validation::validate_reservation;

impl<T, S, N> Gateway<T, S, N>
where
    T: Transport,
    S: KeyValueStore,
    N: Navigator,
{
    /// Book a table. Past dates and malformed fields are rejected locally.
    pub async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<Reservation, ApiError> {
        validate_reservation(request, (self.clock().local)())?;
        self.post("/reservations", request).await
    }

    pub async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get("/reservations/me").await
    }

    pub async fn cancel_reservation(&self, id: i64) -> Result<Reservation, ApiError> {
        self.patch(&format!("/reservations/{id}/cancel"), &json!({}))
            .await
    }

    pub async fn admin_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.get("/admin/reservations").await
    }

    pub async fn update_reservation(
        &self,
        id: i64,
        request: &ReservationRequest,
    ) -> Result<Reservation, ApiError> {
        validate_reservation(request, (self.clock().local)())?;
        self.put(&format!("/admin/reservations/{id}"), request).await
    }

    pub async fn update_reservation_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> Result<Reservation, ApiError> {
        self.patch(
            &format!("/admin/reservations/{id}/status"),
            &json!({ "status": status }),
        )
        .await
    }

    pub async fn delete_reservation(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/reservations/{id}")).await
    }
}

use serde::Serialize;
use shared::models::{
    Appointment, AppointmentRequest, AppointmentStatus, MedicalRecord, MedicalRecordRequest,
};

use crate::{ClientResult, VitalisClient};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusQuery {
    novo_status: AppointmentStatus,
}

impl VitalisClient {
    /// Book an appointment for the signed-in patient
    ///
    /// Fails with [`ClientError::NotLoggedIn`](crate::ClientError::NotLoggedIn)
    /// before any request when nobody is signed in.
    pub async fn book_appointment(&self, request: &AppointmentRequest) -> ClientResult<Appointment> {
        let identity = self.require_identity()?;
        request.validate(chrono::Local::now().naive_local())?;

        let appointment: Appointment = self.http.post("agendamentos", request).await?;
        tracing::info!(
            appointment_id = appointment.id,
            clinic_id = request.clinica_id,
            patient = %identity.subject,
            "Appointment booked"
        );
        Ok(appointment)
    }

    /// Appointments visible to the signed-in user
    pub async fn my_appointments(&self) -> ClientResult<Vec<Appointment>> {
        self.http.get("agendamentos/paciente").await
    }

    /// Move an appointment to `status` (clinic side)
    pub async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> ClientResult<Appointment> {
        self.http
            .patch_query(
                &format!("agendamentos/{id}/status"),
                &StatusQuery {
                    novo_status: status,
                },
            )
            .await
    }

    pub async fn cancel_appointment(&self, id: i64) -> ClientResult<()> {
        self.http
            .post_text(&format!("agendamentos/{id}/cancelar"))
            .await?;
        Ok(())
    }

    /// Write the medical record of an attended appointment
    pub async fn record_attendance(
        &self,
        id: i64,
        record: &MedicalRecordRequest,
    ) -> ClientResult<MedicalRecord> {
        record.validate()?;
        self.http
            .post(&format!("agendamentos/{id}/prontuario"), record)
            .await
    }
}

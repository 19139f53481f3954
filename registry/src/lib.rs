use std::sync::Arc;

use adapter::client::court::CourtClientImpl;
use adapter::client::user::UserClientImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::{database::ConnectionPool, repository::health::HealthCheckRepositoryImpl};
use kernel::messaging::EventPublisher;
use kernel::repository::health::HealthCheckRepository;
use kernel::service::reservation::ReservationService;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    reservation_service: Arc<ReservationService>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        event_publisher: Arc<dyn EventPublisher>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let user_client = Arc::new(UserClientImpl::new(&app_config.users_api));
        let court_client = Arc::new(CourtClientImpl::new(&app_config.courts_api));
        let reservation_service = Arc::new(ReservationService::new(
            reservation_repository,
            user_client,
            court_client,
            event_publisher,
        ));
        Self {
            health_check_repository,
            reservation_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn reservation_service(&self) -> Arc<ReservationService> {
        self.reservation_service.clone()
    }
}

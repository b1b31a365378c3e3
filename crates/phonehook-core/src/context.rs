use phonehook_config::Config;
use phonehook_ghapi_interface::ApiService;
use phonehook_git_interface::GitService;
use phonehook_upstream_interface::UpstreamService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub git_service: &'a (dyn GitService + 'a),
    pub upstream_service: &'a (dyn UpstreamService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use phonehook_config::Config;
    use phonehook_ghapi_interface::MockApiService;
    use phonehook_git_interface::MockGitService;
    use phonehook_upstream_interface::MockUpstreamService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub git_service: MockGitService,
        pub upstream_service: MockUpstreamService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                git_service: MockGitService::new(),
                upstream_service: MockUpstreamService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                git_service: &self.git_service,
                upstream_service: &self.upstream_service,
            }
        }
    }
}

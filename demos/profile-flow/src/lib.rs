//! profile-flow - Example paramflow navigation flow
//!
//! A small member-area flow showing the generated artifacts end to end:
//! a session-scoped base screen, a profile screen inheriting its fields,
//! and an avatar subview configured through an argument bag.

use paramflow::prelude::*;

// ============================================================================
// Navigation Targets
// ============================================================================

/// Request code for profile launches awaiting an edited-profile result
pub const REQUEST_EDIT_PROFILE: i32 = 100;

/// Base screen of the member area; every screen in the flow inherits
/// the session fields declared here.
#[screen_params(
    field(name = "session_token", ty = "String", doc = "opaque auth token"),
    field(name = "theme", ty = "String", default = "light"),
)]
pub struct MemberScreen {
    ctx: Context,
}

impl MemberScreen {
    pub fn new() -> Self {
        Self {
            ctx: Context::new(),
        }
    }
}

impl Default for MemberScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MemberScreen {
    fn context(&self) -> &Context {
        &self.ctx
    }
}

/// The profile screen, launched for result from anywhere in the member
/// area. Receives its parameters through [`ProfileScreenDispatcher::get_data`].
#[screen_params(
    field(name = "user_id", ty = "u64", doc = "record id of the profile owner"),
    field(name = "visible_sections", ty = "String", kind = "list"),
    parent(
        name = "MemberScreen",
        field(name = "session_token", ty = "String"),
        field(name = "theme", ty = "String", default = "light"),
    ),
)]
pub struct ProfileScreen {
    ctx: Context,
    params: ProfileScreenPayload,
}

impl ProfileScreen {
    /// Construct the screen from an inbound intent; arriving without one
    /// (the flow's entry point) falls back to declared defaults.
    pub fn open(intent: Option<&Intent>) -> Self {
        let params = ProfileScreenDispatcher::get_data(intent);
        tracing::info!(user_id = params.user_id(), "profile screen opened");
        Self {
            ctx: Context::new(),
            params,
        }
    }

    pub fn params(&self) -> &ProfileScreenPayload {
        &self.params
    }

    /// Build the avatar pane for this profile.
    pub fn avatar(&self) -> AvatarPane {
        AvatarPaneBuilder::create()
            .set_avatar_url(format!("https://cdn.example/u/{}.png", self.params.user_id()))
            .build()
    }
}

impl Screen for ProfileScreen {
    fn context(&self) -> &Context {
        &self.ctx
    }
}

/// Avatar widget embedded in the profile screen, configured entirely
/// through its generated builder.
#[subview_params(
    field(name = "avatar_url", ty = "String"),
    field(name = "badges", ty = "String", kind = "list"),
)]
#[derive(Default)]
pub struct AvatarPane {
    args: Option<Extras>,
}

impl ViewComponent for AvatarPane {
    fn attach_args(&mut self, args: Extras) {
        self.args = Some(args);
    }

    fn args(&self) -> Option<&Extras> {
        self.args.as_ref()
    }
}

impl AvatarPane {
    /// The configured image source, or empty if never set.
    pub fn avatar_url(&self) -> String {
        AvatarPaneBuilder::get_data(self)
            .map(|payload| payload.avatar_url().clone())
            .unwrap_or_default()
    }
}

// ============================================================================
// Flow Entry Points
// ============================================================================

/// Launch the profile screen for result from any member-area screen.
pub fn open_profile(caller: &impl Screen, session_token: String, user_id: u64) {
    tracing::debug!(user_id, "launching profile for result");
    ProfileScreenDispatcher::create()
        .set_session_token(session_token)
        .set_user_id(user_id)
        .request_code(REQUEST_EDIT_PROFILE)
        .start(caller);
}

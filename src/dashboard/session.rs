use crate::config::MedibotConfig;
use crate::dashboard::audio::{AudioCue, LogChime};
use crate::dashboard::event::{DashboardEvent, DashboardSnapshot, TickReport};
use crate::dashboard::voice::route_transcript;
use crate::dashboard::{Role, Section};
use crate::fleet::{Fleet, FloorMap, RobotAction};
use crate::i18n::{Locale, Translator};
use crate::inventory::InventoryLedger;
use crate::notification::{Notification, NotificationDraft, NotificationLog};
use crate::simulation::{plan_tick, DelayRoll, TickFlags, TickPlan, TickSettings};
use crate::task::{
    validate_form, validate_signature, NewTask, SignatureError, Task, TaskFormError,
    TaskRegistry, TaskSummary, TaskUpdate, MISSING_FIELDS_MESSAGE,
};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

/// Session state shared between the UI shell and the tickers
pub type SharedDashboard = Arc<Mutex<Dashboard>>;

/// Explicit application state for one dashboard session.
///
/// Owns the task registry, notification log and inventory ledger, plus the
/// session flags the lifecycle ticker reads. Every mutation is broadcast as
/// a `DashboardEvent`.
pub struct Dashboard {
    tasks: TaskRegistry,
    notifications: NotificationLog,
    inventory: InventoryLedger,
    fleet: Fleet,
    floor_map: FloorMap,

    emergency_stopped: bool,

    /// Audio cues stay muted until the first user interaction
    user_interacted: bool,

    role: Role,
    active_section: Section,
    translator: Translator,
    settings: TickSettings,
    audio: Box<dyn AudioCue>,

    /// Broadcast channel for change events
    events_tx: broadcast::Sender<DashboardEvent>,
}

impl Dashboard {
    /// Create an empty session with the hospital inventory and demo fleet
    pub fn new(config: &MedibotConfig) -> Self {
        let (events_tx, _) = broadcast::channel(1000);

        Self {
            tasks: TaskRegistry::new(),
            notifications: NotificationLog::with_capacity_limit(config.notifications.max_entries),
            inventory: InventoryLedger::hospital_default(),
            fleet: Fleet::hospital_default(),
            floor_map: FloorMap::hospital_default(),
            emergency_stopped: false,
            user_interacted: false,
            role: config.session.role,
            active_section: Section::default(),
            translator: Translator::new(config.session.locale),
            settings: TickSettings::from(&config.simulation),
            audio: Box::new(LogChime),
            events_tx,
        }
    }

    /// Replace the task registry contents (demo seeding)
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = TaskRegistry::from_tasks(tasks);
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryLedger) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_audio(mut self, audio: impl AudioCue + 'static) -> Self {
        self.audio = Box::new(audio);
        self
    }

    pub fn into_shared(self) -> SharedDashboard {
        Arc::new(Mutex::new(self))
    }

    /// Subscribe to change events
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events_tx.subscribe()
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn summary(&self) -> TaskSummary {
        self.tasks.summary()
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    /// Inventory as the current role may see it
    pub fn inventory_view(&self) -> Option<&InventoryLedger> {
        self.role.can_view_inventory().then_some(&self.inventory)
    }

    /// Notifications shown on the Family Member companion view
    pub fn companion_feed(&self) -> Vec<&Notification> {
        self.notifications.companion_feed()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn floor_map(&self) -> &FloorMap {
        &self.floor_map
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn is_emergency_stopped(&self) -> bool {
        self.emergency_stopped
    }

    pub fn has_user_interacted(&self) -> bool {
        self.user_interacted
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    // ── Tasks ────────────────────────────────────────────────────────────

    /// Create a task from an already-validated request
    pub fn add_task(&mut self, request: NewTask) -> Task {
        let task = self.tasks.add(request);
        self.emit(DashboardEvent::TaskAdded { task_id: task.id });
        self.notify(NotificationDraft::info(format!(
            "New task \"{}\" assigned to {}.",
            task.name, task.robot
        )));
        task
    }

    /// Validate the assignment form, then create the task.
    ///
    /// On missing fields the registry is untouched and the user is told via
    /// the notification log.
    pub fn submit_task_form(&mut self, request: NewTask) -> Result<Task, TaskFormError> {
        if let Err(e) = validate_form(&request) {
            warn!(error = %e, "Task form rejected");
            self.notify(NotificationDraft::info(MISSING_FIELDS_MESSAGE));
            return Err(e);
        }
        Ok(self.add_task(request))
    }

    /// Merge fields into a task; silently ignores unknown ids
    pub fn update_task(&mut self, id: u64, update: &TaskUpdate) -> Option<Task> {
        let task = self.tasks.update(id, update).cloned()?;
        self.emit(DashboardEvent::TaskUpdated { task_id: id });
        Some(task)
    }

    /// Confirm a delivery with the recipient's typed signature.
    ///
    /// Blank text is rejected before anything changes. An unknown id is
    /// reported without appending a notification.
    pub fn record_signature(&mut self, id: u64, signature: &str) -> Result<Task, SignatureError> {
        validate_signature(signature)?;

        let Some(task) = self.update_task(id, &TaskUpdate::signed(signature)) else {
            return Err(SignatureError::UnknownTask(id));
        };

        info!(task_id = id, "Delivery signed");
        self.notify(NotificationDraft::info(format!(
            "Delivery of \"{}\" confirmed by signature: \"{}\".",
            task.name, signature
        )));
        Ok(task)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    pub fn tick_flags(&self) -> TickFlags {
        TickFlags {
            emergency_stopped: self.emergency_stopped,
            user_interacted: self.user_interacted,
        }
    }

    /// Run one lifecycle tick over every task
    pub fn tick(&mut self, roll: &mut dyn DelayRoll) -> TickReport {
        let flags = self.tick_flags();
        if flags.emergency_stopped {
            debug!("Tick skipped, emergency stop active");
            return TickReport {
                paused: true,
                ..Default::default()
            };
        }

        let plan = plan_tick(
            self.tasks.tasks(),
            flags,
            &self.settings,
            roll,
            &self.translator,
        );
        self.apply_plan(plan)
    }

    /// Apply a planned tick: task merges, log entries, inventory, chime
    pub fn apply_plan(&mut self, plan: TickPlan) -> TickReport {
        let report = TickReport {
            advanced: plan
                .updates
                .len()
                .saturating_sub(plan.delayed.len() + plan.delivered.len()),
            delayed: plan.delayed.len(),
            delivered: plan.delivered.len(),
            paused: false,
        };

        for (id, update) in &plan.updates {
            self.update_task(*id, update);
        }

        for id in &plan.delayed {
            warn!(task_id = id, "Delivery delayed");
        }

        for draft in plan.notifications {
            self.notify(draft);
        }

        for adjustment in &plan.adjustments {
            let quantity = self.inventory.apply(adjustment);
            self.emit(DashboardEvent::InventoryChanged {
                item: adjustment.item.clone(),
                quantity,
            });
        }

        if plan.play_chime {
            // Audio is best-effort
            if let Err(e) = self.audio.play_tone() {
                warn!(error = %e, "Failed to play delivery chime");
            }
        }

        if !plan.delivered.is_empty() {
            info!(delivered = report.delivered, "Deliveries completed");
        }
        self.emit(DashboardEvent::Tick { report });
        report
    }

    // ── Notifications ────────────────────────────────────────────────────

    pub fn add_notification(&mut self, message: impl Into<String>) -> Notification {
        self.notify(NotificationDraft::info(message))
    }

    pub fn clear_notifications(&mut self) -> usize {
        let removed = self.notifications.clear();
        self.emit(DashboardEvent::NotificationsCleared { removed });
        removed
    }

    // ── Session controls ─────────────────────────────────────────────────

    /// Halt all robots; returns `false` if already stopped
    pub fn emergency_stop(&mut self) -> bool {
        if self.emergency_stopped {
            return false;
        }
        self.emergency_stopped = true;
        warn!("Emergency stop engaged");

        let message = self.translator.t("robotHalted").to_string();
        self.notify(NotificationDraft::info(message));
        self.emit(DashboardEvent::EmergencyStop { active: true });
        true
    }

    /// Resume after an emergency stop; returns `false` if not stopped
    pub fn resume(&mut self) -> bool {
        if !self.emergency_stopped {
            return false;
        }
        self.emergency_stopped = false;
        info!("Robot operations resumed");

        let message = self.translator.t("robotResumed").to_string();
        self.notify(NotificationDraft::info(message));
        self.emit(DashboardEvent::EmergencyStop { active: false });
        true
    }

    /// Record the first user gesture; audio cues are allowed from now on
    pub fn mark_user_interaction(&mut self) {
        if !self.user_interacted {
            self.user_interacted = true;
            debug!("User interaction recorded, audio enabled");
        }
    }

    pub fn set_role(&mut self, role: Role) {
        info!(role = %role, "Role changed");
        self.role = role;
        if !self.active_section.is_enabled_for(role) {
            self.set_section(Section::Delivery);
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.translator.set_locale(locale);
    }

    /// Sidebar navigation; disabled entries for the role are refused
    pub fn select_section(&mut self, section: Section) -> bool {
        if !section.is_enabled_for(self.role) {
            debug!(section = ?section, role = %self.role, "Section disabled for role");
            return false;
        }
        self.set_section(section);
        true
    }

    /// Route a speech transcript; unknown commands change nothing
    pub fn handle_voice_transcript(&mut self, transcript: &str) -> Option<Section> {
        let route = route_transcript(transcript)?;
        self.notify(NotificationDraft::info(route.message));
        self.set_section(route.section);
        Some(route.section)
    }

    /// Simulated QR scan; returns the compartment holding the item
    pub fn scan_qr<R: Rng + ?Sized>(&mut self, value: &str, rng: &mut R) -> Option<u8> {
        let value = value.trim();
        if value.is_empty() {
            self.notify(NotificationDraft::info("Please enter a QR Code value to scan."));
            return None;
        }

        let compartment = rng.gen_range(1..=4u8);
        self.notify(NotificationDraft::info(format!(
            "QR Code Scanned: \"{}\". Displaying details. (Simulated)",
            value
        )));
        self.notify(NotificationDraft::info(format!(
            "Simulated: Item {} is in compartment {}.",
            value, compartment
        )));
        Some(compartment)
    }

    // ── Fleet ────────────────────────────────────────────────────────────

    /// One animation step of the floor map; robots hold still while stopped
    pub fn step_floor_map(&mut self) -> usize {
        if self.emergency_stopped {
            return 0;
        }
        let arrivals = self.floor_map.step();
        if arrivals > 0 {
            info!(count = arrivals, "Robots reached destination");
            self.emit(DashboardEvent::RobotsArrived { count: arrivals });
        }
        arrivals
    }

    pub fn update_fleet_telemetry<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fleet.update(rng);
        let stats = self.fleet.stats();
        self.emit(DashboardEvent::FleetUpdated { stats });
    }

    pub fn apply_robot_action(&mut self, robot_id: &str, action: RobotAction) -> bool {
        let applied = self.fleet.apply(robot_id, action);
        if applied {
            info!(robot = %robot_id, action = ?action, "Robot action applied");
            let stats = self.fleet.stats();
            self.emit(DashboardEvent::FleetUpdated { stats });
        }
        applied
    }

    // ── Rendering ────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            tasks: self.tasks.tasks().to_vec(),
            summary: self.tasks.summary(),
            notifications: self.notifications.to_vec(),
            inventory: self.inventory_view().map(|i| i.items().clone()),
            emergency_stopped: self.emergency_stopped,
            user_interacted: self.user_interacted,
            role: self.role,
            active_section: self.active_section,
            locale: self.translator.locale(),
            fleet: self.fleet.stats(),
            floor_robots: self.floor_map.robots.clone(),
        }
    }

    fn set_section(&mut self, section: Section) {
        if self.active_section != section {
            self.active_section = section;
            self.emit(DashboardEvent::SectionChanged { section });
        }
    }

    fn notify(&mut self, draft: NotificationDraft) -> Notification {
        let notification = self.notifications.append(draft);
        self.emit(DashboardEvent::NotificationAdded {
            notification: notification.clone(),
        });
        notification
    }

    fn emit(&self, event: DashboardEvent) {
        // No subscribers is fine
        let _ = self.events_tx.send(event);
    }
}

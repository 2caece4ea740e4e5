use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;

/// Operational state shown on the fleet overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotState {
    Idle,
    Active,
    Charging,
    Maintenance,
    Offline,
    Emergency,
}

/// Operator actions from the fleet overview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotAction {
    /// Back to idle with the error counter reset
    Restart,
    Maintenance,
    Charge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetRobot {
    pub id: String,
    pub name: String,
    pub model: String,
    pub status: RobotState,
    /// Charge level in percent
    pub battery: f64,
    pub battery_health: u8,
    /// Degrees Celsius
    pub temperature: f64,
    pub signal_strength: f64,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
    pub tasks_completed: u32,
    /// Kilometres travelled today
    pub total_distance: f64,
    pub error_count: u32,
    pub efficiency: u8,
    pub load_capacity: u32,
    pub current_load: u32,
    /// Minutes until fully charged, while charging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_charge_time: Option<u32>,
    pub software_version: String,
}

impl FleetRobot {
    /// Apply one telemetry interval of simulated drift
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.status {
            RobotState::Charging if self.battery < 100.0 => {
                self.battery = (self.battery + 1.0).min(100.0);
                if let Some(minutes) = self.estimated_charge_time.as_mut() {
                    *minutes = minutes.saturating_sub(1);
                }
            }
            RobotState::Active if self.battery > 0.0 => {
                self.battery = (self.battery - 0.2).max(0.0);
            }
            _ => {}
        }

        self.temperature += (rng.gen::<f64>() - 0.5) * 2.0;
        self.signal_strength =
            (self.signal_strength + (rng.gen::<f64>() - 0.5) * 5.0).clamp(70.0, 100.0);

        if self.status == RobotState::Active && rng.gen_bool(0.1) {
            self.tasks_completed += 1;
            self.total_distance += rng.gen::<f64>() * 0.5;
        }
    }

    pub fn apply(&mut self, action: RobotAction) {
        match action {
            RobotAction::Restart => {
                self.status = RobotState::Idle;
                self.error_count = 0;
            }
            RobotAction::Maintenance => self.status = RobotState::Maintenance,
            RobotAction::Charge => self.status = RobotState::Charging,
        }
    }

    /// Low battery or degraded battery health
    pub fn battery_critical(&self) -> bool {
        self.battery < 20.0 || self.battery_health < 80
    }
}

/// Fleet-wide aggregates for the overview header
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total_robots: usize,
    pub active_robots: usize,
    pub average_battery: u8,
    pub total_tasks_today: u32,
    /// Rounded to one decimal
    pub total_distance_today: f64,
    pub average_efficiency: u8,
    pub robots_needing_maintenance: usize,
    pub critical_alerts: usize,
}

/// Ordering for the fleet list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FleetSort {
    #[default]
    Name,
    Battery,
    Efficiency,
    Tasks,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Fleet {
    robots: Vec<FleetRobot>,
}

impl Fleet {
    pub fn new(robots: Vec<FleetRobot>) -> Self {
        Self { robots }
    }

    pub fn robots(&self) -> &[FleetRobot] {
        &self.robots
    }

    pub fn get(&self, id: &str) -> Option<&FleetRobot> {
        self.robots.iter().find(|r| r.id == id)
    }

    /// Drift every robot once
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for robot in &mut self.robots {
            robot.drift(rng);
        }
    }

    /// Apply an operator action; `false` if the robot is unknown
    pub fn apply(&mut self, id: &str, action: RobotAction) -> bool {
        match self.robots.iter_mut().find(|r| r.id == id) {
            Some(robot) => {
                robot.apply(action);
                true
            }
            None => false,
        }
    }

    pub fn stats(&self) -> FleetStats {
        let total = self.robots.len();
        if total == 0 {
            return FleetStats::default();
        }

        let battery_sum: f64 = self.robots.iter().map(|r| r.battery).sum();
        let efficiency_sum: u32 = self.robots.iter().map(|r| r.efficiency as u32).sum();
        let distance: f64 = self.robots.iter().map(|r| r.total_distance).sum();

        FleetStats {
            total_robots: total,
            active_robots: self.count(|r| r.status == RobotState::Active),
            average_battery: (battery_sum / total as f64).round() as u8,
            total_tasks_today: self.robots.iter().map(|r| r.tasks_completed).sum(),
            total_distance_today: (distance * 10.0).round() / 10.0,
            average_efficiency: (efficiency_sum as f64 / total as f64).round() as u8,
            robots_needing_maintenance: self.count(|r| r.status == RobotState::Maintenance),
            critical_alerts: self.count(|r| {
                r.battery_critical() || r.status == RobotState::Emergency
            }),
        }
    }

    /// Filtered and sorted view for the fleet list
    pub fn view(&self, filter: Option<RobotState>, sort: FleetSort) -> Vec<&FleetRobot> {
        let mut robots: Vec<&FleetRobot> = self
            .robots
            .iter()
            .filter(|r| filter.map_or(true, |s| r.status == s))
            .collect();

        robots.sort_by(|a, b| match sort {
            FleetSort::Name => a.name.cmp(&b.name),
            FleetSort::Battery => b.battery.partial_cmp(&a.battery).unwrap_or(Ordering::Equal),
            FleetSort::Efficiency => b.efficiency.cmp(&a.efficiency),
            FleetSort::Tasks => b.tasks_completed.cmp(&a.tasks_completed),
        });
        robots
    }

    fn count(&self, pred: impl Fn(&FleetRobot) -> bool) -> usize {
        self.robots.iter().filter(|r| pred(r)).count()
    }

    /// The four-robot demo fleet
    pub fn hospital_default() -> Self {
        let robot = |id: &str, name: &str, model: &str, status, battery: f64| FleetRobot {
            id: id.to_string(),
            name: name.to_string(),
            model: model.to_string(),
            status,
            battery,
            battery_health: 90,
            temperature: 40.0,
            signal_strength: 90.0,
            location: String::new(),
            current_task: None,
            tasks_completed: 0,
            total_distance: 0.0,
            error_count: 0,
            efficiency: 90,
            load_capacity: 15,
            current_load: 0,
            estimated_charge_time: None,
            software_version: "v2.1.3".to_string(),
        };

        let mut a = robot("robot-a", "Robot A", "MediBot Pro 3000", RobotState::Active, 85.0);
        a.battery_health = 92;
        a.temperature = 42.0;
        a.signal_strength = 95.0;
        a.location = "Ward A - Room 101".to_string();
        a.current_task = Some("Medication Delivery".to_string());
        a.tasks_completed = 23;
        a.total_distance = 12.4;
        a.error_count = 2;
        a.efficiency = 94;
        a.current_load = 8;

        let mut b = robot("robot-b", "Robot B", "MediBot Pro 3000", RobotState::Charging, 25.0);
        b.battery_health = 88;
        b.temperature = 38.0;
        b.signal_strength = 87.0;
        b.location = "Charging Station 1".to_string();
        b.tasks_completed = 31;
        b.total_distance = 18.7;
        b.error_count = 1;
        b.efficiency = 91;
        b.estimated_charge_time = Some(45);

        let mut c = robot("robot-c", "Robot C", "MediBot Lite 2000", RobotState::Maintenance, 60.0);
        c.battery_health = 76;
        c.temperature = 45.0;
        c.signal_strength = 92.0;
        c.location = "Maintenance Bay".to_string();
        c.tasks_completed = 19;
        c.total_distance = 9.8;
        c.error_count = 5;
        c.efficiency = 78;
        c.load_capacity = 10;
        c.software_version = "v2.0.8".to_string();

        let mut d = robot("robot-d", "Robot D", "MediBot Pro 3000", RobotState::Idle, 78.0);
        d.battery_health = 95;
        d.signal_strength = 89.0;
        d.location = "Storage Room".to_string();
        d.tasks_completed = 27;
        d.total_distance = 15.2;
        d.efficiency = 96;

        Self::new(vec![a, b, c, d])
    }
}

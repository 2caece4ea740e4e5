use serde::Serialize;

/// Position on the floor map canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorStatus {
    Idle,
    Moving,
    Delivering,
    Charging,
    Maintenance,
}

impl FloorStatus {
    pub fn is_travelling(&self) -> bool {
        matches!(self, FloorStatus::Moving | FloorStatus::Delivering)
    }
}

/// A robot icon on the floor map following hardcoded waypoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorRobot {
    pub id: String,
    pub name: String,
    pub position: Point,
    pub status: FloorStatus,
    pub battery: u8,
    /// Distance covered per animation step
    pub speed: f64,
    /// `path[0]` is the last waypoint reached, `path[1]` the current target
    pub path: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// What a single animation step did to a robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStep {
    Stationary,
    Moved,
    ReachedWaypoint,
    Arrived,
}

impl FloorRobot {
    /// Move one step toward the next waypoint by linear interpolation.
    ///
    /// Snaps onto the waypoint when within `speed`. Reaching the final
    /// waypoint makes the robot idle and clears its route. A robot with no
    /// positive speed does not move.
    pub fn step(&mut self) -> MotionStep {
        if !self.status.is_travelling() || self.path.len() < 2 || !(self.speed > 0.0) {
            return MotionStep::Stationary;
        }

        let target = self.path[1];
        let distance = self.position.distance_to(&target);

        if distance <= self.speed {
            self.position = target;
            self.path.remove(0);

            if self.path.len() == 1 {
                self.status = FloorStatus::Idle;
                self.path.clear();
                self.current_task = None;
                self.destination = None;
                return MotionStep::Arrived;
            }
            return MotionStep::ReachedWaypoint;
        }

        self.position.x += (target.x - self.position.x) / distance * self.speed;
        self.position.y += (target.y - self.position.y) / distance * self.speed;
        MotionStep::Moved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Room,
    Corridor,
    Station,
    Storage,
    Emergency,
}

/// Rectangular area on the floor map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: RoomKind,
}

impl Room {
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

const fn room(
    id: &'static str,
    name: &'static str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    kind: RoomKind,
) -> Room {
    Room {
        id,
        name,
        x,
        y,
        width,
        height,
        kind,
    }
}

const HOSPITAL_ROOMS: &[Room] = &[
    room("reception", "Reception", 50.0, 50.0, 100.0, 80.0, RoomKind::Station),
    room("radiology", "Radiology", 200.0, 50.0, 100.0, 80.0, RoomKind::Room),
    room("pharmacy", "Pharmacy", 350.0, 50.0, 100.0, 80.0, RoomKind::Storage),
    room("laboratory", "Laboratory", 500.0, 50.0, 100.0, 80.0, RoomKind::Room),
    room("emergency", "Emergency", 50.0, 180.0, 80.0, 100.0, RoomKind::Emergency),
    room("corridor", "Main Corridor", 150.0, 180.0, 400.0, 60.0, RoomKind::Corridor),
    room("ward-a", "Ward A", 50.0, 320.0, 100.0, 80.0, RoomKind::Room),
    room("ward-b", "Ward B", 200.0, 320.0, 100.0, 80.0, RoomKind::Room),
    room("surgery-1", "Surgery 1", 350.0, 320.0, 100.0, 80.0, RoomKind::Room),
    room("surgery-2", "Surgery 2", 500.0, 320.0, 100.0, 80.0, RoomKind::Room),
    room("icu", "ICU", 650.0, 320.0, 100.0, 80.0, RoomKind::Room),
    room("storage", "Storage", 350.0, 450.0, 100.0, 60.0, RoomKind::Storage),
    room("kitchen", "Kitchen", 50.0, 450.0, 80.0, 60.0, RoomKind::Station),
    room("laundry", "Laundry", 150.0, 450.0, 80.0, 60.0, RoomKind::Station),
    room("waste", "Waste Mgmt", 250.0, 450.0, 80.0, 60.0, RoomKind::Station),
    room("charging-1", "Charging 1", 80.0, 380.0, 40.0, 20.0, RoomKind::Station),
    room("charging-2", "Charging 2", 680.0, 280.0, 40.0, 20.0, RoomKind::Station),
];

/// Floor layout plus the robots drawn on it
#[derive(Debug, Clone, Serialize)]
pub struct FloorMap {
    pub rooms: Vec<Room>,
    pub robots: Vec<FloorRobot>,
}

impl FloorMap {
    pub fn new(rooms: Vec<Room>, robots: Vec<FloorRobot>) -> Self {
        Self { rooms, robots }
    }

    /// Hospital floor with the demo robots en route
    pub fn hospital_default() -> Self {
        let robot = |id: &str, name: &str, at: Point, status, battery, speed, path: Vec<Point>| {
            FloorRobot {
                id: id.to_string(),
                name: name.to_string(),
                position: at,
                status,
                battery,
                speed,
                path,
                current_task: None,
                destination: None,
            }
        };

        let mut a = robot(
            "robot-a",
            "Robot A",
            Point::new(150.0, 200.0),
            FloorStatus::Delivering,
            85,
            2.0,
            vec![
                Point::new(150.0, 200.0),
                Point::new(200.0, 200.0),
                Point::new(200.0, 150.0),
                Point::new(300.0, 150.0),
            ],
        );
        a.current_task = Some("Medication Delivery to Room 101".to_string());
        a.destination = Some("Room 101".to_string());

        let mut b = robot(
            "robot-b",
            "Robot B",
            Point::new(400.0, 300.0),
            FloorStatus::Moving,
            92,
            1.5,
            vec![
                Point::new(400.0, 300.0),
                Point::new(450.0, 300.0),
                Point::new(450.0, 250.0),
                Point::new(500.0, 250.0),
            ],
        );
        b.current_task = Some("Lab Sample Transport".to_string());
        b.destination = Some("Laboratory".to_string());

        let c = robot(
            "robot-c",
            "Robot C",
            Point::new(100.0, 400.0),
            FloorStatus::Charging,
            25,
            0.0,
            Vec::new(),
        );
        let d = robot(
            "robot-d",
            "Robot D",
            Point::new(350.0, 180.0),
            FloorStatus::Idle,
            78,
            0.0,
            Vec::new(),
        );

        Self::new(HOSPITAL_ROOMS.to_vec(), vec![a, b, c, d])
    }

    /// Advance every robot one step; returns how many arrived this step
    pub fn step(&mut self) -> usize {
        self.robots
            .iter_mut()
            .map(|r| r.step())
            .filter(|s| *s == MotionStep::Arrived)
            .count()
    }

    /// Room under a point, corridors included
    pub fn room_at(&self, point: &Point) -> Option<&Room> {
        self.rooms.iter().find(|r| r.contains(point))
    }

    pub fn robot(&self, id: &str) -> Option<&FloorRobot> {
        self.robots.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(path: Vec<Point>, speed: f64) -> FloorRobot {
        FloorRobot {
            id: "r".to_string(),
            name: "R".to_string(),
            position: path[0],
            status: FloorStatus::Moving,
            battery: 100,
            speed,
            path,
            current_task: Some("Run".to_string()),
            destination: Some("Lab".to_string()),
        }
    }

    #[test]
    fn test_moves_toward_target_by_speed() {
        let mut robot = mover(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)], 2.0);

        assert_eq!(robot.step(), MotionStep::Moved);
        assert!((robot.position.x - 2.0).abs() < 1e-9);
        assert_eq!(robot.position.y, 0.0);
    }

    #[test]
    fn test_diagonal_step_keeps_speed() {
        let mut robot = mover(vec![Point::new(0.0, 0.0), Point::new(30.0, 40.0)], 5.0);

        robot.step();
        assert!((robot.position.x - 3.0).abs() < 1e-9);
        assert!((robot.position.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_snaps_to_waypoint_then_continues() {
        let mut robot = mover(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 10.0),
            ],
            2.0,
        );

        assert_eq!(robot.step(), MotionStep::ReachedWaypoint);
        assert_eq!(robot.position, Point::new(1.0, 0.0));
        assert_eq!(robot.path.len(), 2);
        assert_eq!(robot.status, FloorStatus::Moving);
    }

    #[test]
    fn test_arrival_clears_route() {
        let mut robot = mover(vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0)], 2.0);

        assert_eq!(robot.step(), MotionStep::Moved);
        assert_eq!(robot.step(), MotionStep::Arrived);
        assert_eq!(robot.position, Point::new(3.0, 0.0));
        assert_eq!(robot.status, FloorStatus::Idle);
        assert!(robot.path.is_empty());
        assert_eq!(robot.current_task, None);
        assert_eq!(robot.destination, None);

        // Idle robots stay put
        assert_eq!(robot.step(), MotionStep::Stationary);
    }

    #[test]
    fn test_non_travelling_robot_is_stationary() {
        let mut robot = mover(vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0)], 2.0);
        robot.status = FloorStatus::Charging;

        assert_eq!(robot.step(), MotionStep::Stationary);
        assert_eq!(robot.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_speed_robot_holds_position() {
        // Already sitting on the next waypoint
        let mut robot = mover(
            vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0), Point::new(9.0, 5.0)],
            0.0,
        );

        assert_eq!(robot.step(), MotionStep::Stationary);
        assert_eq!(robot.position, Point::new(5.0, 5.0));
        assert!(robot.position.x.is_finite() && robot.position.y.is_finite());
    }

    #[test]
    fn test_exact_speed_distance_snaps() {
        let mut robot = mover(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)], 2.0);

        assert_eq!(robot.step(), MotionStep::Arrived);
        assert_eq!(robot.position, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_default_map_robots_eventually_arrive() {
        let mut map = FloorMap::hospital_default();
        let mut arrivals = 0;

        for _ in 0..1_000 {
            arrivals += map.step();
        }

        assert_eq!(arrivals, 2);
        assert!(map.robots.iter().all(|r| r.status != FloorStatus::Delivering));
        assert_eq!(map.robot("robot-a").unwrap().position, Point::new(300.0, 150.0));
    }

    #[test]
    fn test_room_lookup() {
        let map = FloorMap::hospital_default();
        assert_eq!(map.room_at(&Point::new(400.0, 90.0)).unwrap().name, "Pharmacy");
        assert!(map.room_at(&Point::new(900.0, 900.0)).is_none());
    }
}

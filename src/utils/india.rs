//! Built-in sample dataset: major Indian cities and the highway links
//! between them.
//!
//! Coordinates are city centers in degrees. Roads are undirected and
//! only name cities listed in [`CITIES`].

use crate::errors::GraphError;
use crate::graph::CityGraph;

/// (name, state, latitude, longitude)
pub const CITIES: &[(&str, &str, f64, f64)] = &[
    ("Agra", "Uttar Pradesh", 27.1767, 78.0081),
    ("Ahmedabad", "Gujarat", 23.0225, 72.5714),
    ("Amritsar", "Punjab", 31.6340, 74.8723),
    ("Aurangabad", "Maharashtra", 19.8762, 75.3433),
    ("Belagavi", "Karnataka", 15.8497, 74.4977),
    ("Bengaluru", "Karnataka", 12.9716, 77.5946),
    ("Bhopal", "Madhya Pradesh", 23.2599, 77.4126),
    ("Bhubaneswar", "Odisha", 20.2961, 85.8245),
    ("Chandigarh", "Chandigarh", 30.7333, 76.7794),
    ("Chennai", "Tamil Nadu", 13.0827, 80.2707),
    ("Coimbatore", "Tamil Nadu", 11.0168, 76.9558),
    ("Gwalior", "Madhya Pradesh", 26.2183, 78.1828),
    ("Hubballi", "Karnataka", 15.3647, 75.1240),
    ("Hyderabad", "Telangana", 17.3850, 78.4867),
    ("Indore", "Madhya Pradesh", 22.7196, 75.8577),
    ("Jabalpur", "Madhya Pradesh", 23.1815, 79.9864),
    ("Jaipur", "Rajasthan", 26.9124, 75.7873),
    ("Jodhpur", "Rajasthan", 26.2389, 73.0243),
    ("Kanpur", "Uttar Pradesh", 26.4499, 80.3319),
    ("Kochi", "Kerala", 9.9312, 76.2673),
    ("Kolkata", "West Bengal", 22.5726, 88.3639),
    ("Kota", "Rajasthan", 25.2138, 75.8648),
    ("Kozhikode", "Kerala", 11.2588, 75.7804),
    ("Lucknow", "Uttar Pradesh", 26.8467, 80.9462),
    ("Madurai", "Tamil Nadu", 9.9252, 78.1198),
    ("Mangaluru", "Karnataka", 12.9141, 74.8560),
    ("Mumbai", "Maharashtra", 19.0760, 72.8777),
    ("Mysuru", "Karnataka", 12.2958, 76.6394),
    ("Nagpur", "Maharashtra", 21.1458, 79.0882),
    ("Nashik", "Maharashtra", 19.9975, 73.7898),
    ("New Delhi", "Delhi", 28.6139, 77.2090),
    ("Panaji", "Goa", 15.4909, 73.8278),
    ("Patna", "Bihar", 25.5941, 85.1376),
    ("Pune", "Maharashtra", 18.5204, 73.8567),
    ("Raipur", "Chhattisgarh", 21.2514, 81.6296),
    ("Rajkot", "Gujarat", 22.3039, 70.8022),
    ("Ranchi", "Jharkhand", 23.3441, 85.3096),
    ("Surat", "Gujarat", 21.1702, 72.8311),
    ("Thiruvananthapuram", "Kerala", 8.5241, 76.9366),
    ("Tirupati", "Andhra Pradesh", 13.6288, 79.4192),
    ("Udaipur", "Rajasthan", 24.5854, 73.7125),
    ("Vadodara", "Gujarat", 22.3072, 73.1812),
    ("Varanasi", "Uttar Pradesh", 25.3176, 82.9739),
    ("Vijayawada", "Andhra Pradesh", 16.5062, 80.6480),
    ("Visakhapatnam", "Andhra Pradesh", 17.6868, 83.2185),
    ("Warangal", "Telangana", 17.9689, 79.5941),
];

pub const ROADS: &[(&str, &str)] = &[
    // West
    ("Mumbai", "Pune"),
    ("Mumbai", "Nashik"),
    ("Mumbai", "Surat"),
    ("Pune", "Nashik"),
    ("Pune", "Aurangabad"),
    ("Pune", "Belagavi"),
    ("Pune", "Hyderabad"),
    ("Nashik", "Aurangabad"),
    ("Aurangabad", "Nagpur"),
    ("Surat", "Vadodara"),
    ("Vadodara", "Ahmedabad"),
    ("Vadodara", "Indore"),
    ("Ahmedabad", "Rajkot"),
    ("Ahmedabad", "Udaipur"),
    // North
    ("Udaipur", "Jodhpur"),
    ("Udaipur", "Kota"),
    ("Jodhpur", "Jaipur"),
    ("Kota", "Jaipur"),
    ("Kota", "Bhopal"),
    ("Jaipur", "New Delhi"),
    ("Jaipur", "Agra"),
    ("New Delhi", "Agra"),
    ("New Delhi", "Chandigarh"),
    ("New Delhi", "Lucknow"),
    ("Chandigarh", "Amritsar"),
    ("Agra", "Gwalior"),
    ("Agra", "Kanpur"),
    ("Kanpur", "Lucknow"),
    ("Lucknow", "Varanasi"),
    // Central
    ("Gwalior", "Bhopal"),
    ("Bhopal", "Indore"),
    ("Bhopal", "Jabalpur"),
    ("Bhopal", "Nagpur"),
    ("Jabalpur", "Nagpur"),
    ("Jabalpur", "Varanasi"),
    ("Nagpur", "Raipur"),
    ("Nagpur", "Hyderabad"),
    // East
    ("Varanasi", "Patna"),
    ("Patna", "Ranchi"),
    ("Ranchi", "Kolkata"),
    ("Ranchi", "Raipur"),
    ("Kolkata", "Bhubaneswar"),
    ("Bhubaneswar", "Raipur"),
    ("Bhubaneswar", "Visakhapatnam"),
    // South
    ("Hyderabad", "Warangal"),
    ("Hyderabad", "Vijayawada"),
    ("Hyderabad", "Bengaluru"),
    ("Warangal", "Vijayawada"),
    ("Vijayawada", "Visakhapatnam"),
    ("Vijayawada", "Tirupati"),
    ("Tirupati", "Chennai"),
    ("Belagavi", "Hubballi"),
    ("Belagavi", "Panaji"),
    ("Panaji", "Mangaluru"),
    ("Hubballi", "Bengaluru"),
    ("Mangaluru", "Bengaluru"),
    ("Mangaluru", "Kozhikode"),
    ("Bengaluru", "Mysuru"),
    ("Bengaluru", "Chennai"),
    ("Bengaluru", "Coimbatore"),
    ("Mysuru", "Kozhikode"),
    ("Coimbatore", "Kochi"),
    ("Coimbatore", "Madurai"),
    ("Chennai", "Madurai"),
    ("Madurai", "Thiruvananthapuram"),
    ("Kochi", "Thiruvananthapuram"),
    ("Kochi", "Kozhikode"),
];

/// Builds the sample graph from [`CITIES`] and [`ROADS`].
pub fn sample_graph() -> Result<CityGraph, GraphError> {
    let builder = CITIES
        .iter()
        .fold(CityGraph::builder(), |builder, &(name, state, lat, lon)| {
            builder.city(name, state, lat, lon)
        });
    ROADS
        .iter()
        .fold(builder, |builder, &(a, b)| builder.road(a, b))
        .build()
}

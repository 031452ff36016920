//! LLM function-calling tool registry
//!
//! Exposes the engine operations as OpenAI-style tools: each entry bundles a
//! JSON-schema parameter description with a handler, so the surrounding
//! agent layer can hand the schemas to an LLM and dispatch its calls by
//! name. The registry is an explicit static table built at startup.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::budget::BudgetTier;
use crate::engine::EventEngine;
use crate::error::EventAiError;
use crate::query::RecommendationRequest;
use crate::search::{VendorQuery, VenueQuery};

/// City identifiers accepted by the tool schemas
pub const SUPPORTED_CITIES: &[&str] = &[
    "delhi",
    "mumbai",
    "bangalore",
    "chennai",
    "hyderabad",
    "pune",
    "kolkata",
    "gurgaon",
    "noida",
    "kanpur",
    "ahmedabad",
];

/// Event types accepted by the venue search schema
pub const SUPPORTED_EVENT_TYPES: &[&str] = &[
    "wedding",
    "corporate",
    "birthday",
    "anniversary",
    "engagement",
    "reception",
];

/// Vendor categories accepted by the vendor search schema
pub const SUPPORTED_VENDOR_TYPES: &[&str] = &[
    "flowers",
    "decoration",
    "food",
    "photography",
    "music_dj",
    "transportation",
    "makeup_artist",
    "tent_house",
];

/// Event types accepted by the budget estimation schema
const ESTIMATE_EVENT_TYPES: &[&str] = &[
    "wedding",
    "corporate",
    "birthday",
    "anniversary",
    "engagement",
];

// Result-list caps for the LLM-facing envelopes; kept tighter than the
// library results so tool output stays prompt-sized.
const TOOL_MAX_VENUES: usize = 5;
const TOOL_MAX_VENDORS: usize = 5;
const TOOL_RECOMMENDATION_VENUES: usize = 3;
const TOOL_RECOMMENDATION_VENDORS_PER_TYPE: usize = 2;

/// A callable tool description in OpenAI function-calling shape
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

type Handler = fn(&EventEngine, Value) -> crate::Result<Value>;

struct Tool {
    definition: ToolDefinition,
    handler: Handler,
}

/// Static name → {schema, handler} registry over an engine
pub struct ToolRegistry {
    engine: EventEngine,
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Build the registry for an engine
    #[must_use]
    pub fn new(engine: EventEngine) -> Self {
        let tools = vec![
            Tool {
                definition: search_venues_definition(),
                handler: search_venues_tool,
            },
            Tool {
                definition: search_vendors_definition(),
                handler: search_vendors_tool,
            },
            Tool {
                definition: estimate_budget_definition(),
                handler: estimate_budget_tool,
            },
            Tool {
                definition: get_recommendations_definition(),
                handler: get_recommendations_tool,
            },
            Tool {
                definition: get_cities_and_areas_definition(),
                handler: get_cities_and_areas_tool,
            },
        ];
        Self { engine, tools }
    }

    /// The registered tool definitions
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter().map(|t| &t.definition)
    }

    /// OpenAI-compatible function definition list for all registered tools
    #[must_use]
    pub fn function_definitions(&self) -> Value {
        let functions: Vec<Value> = self
            .definitions()
            .map(|d| {
                json!({
                    "type": "function",
                    "function": {
                        "name": d.name,
                        "description": d.description,
                        "parameters": d.parameters,
                    }
                })
            })
            .collect();
        Value::Array(functions)
    }

    /// Dispatch a tool call by name with a JSON argument object
    pub fn call(&self, name: &str, arguments: Value) -> crate::Result<Value> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.definition.name == name)
            .ok_or_else(|| EventAiError::tool(format!("function '{name}' not found")))?;
        (tool.handler)(&self.engine, arguments)
    }
}

fn decode_args<T: for<'de> Deserialize<'de>>(name: &str, arguments: Value) -> crate::Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| EventAiError::tool(format!("invalid arguments for '{name}': {e}")))
}

// --- search_venues ---

fn search_venues_definition() -> ToolDefinition {
    ToolDefinition {
        name: "search_venues",
        description:
            "Search for event venues based on location, capacity, budget, and event type",
        parameters: json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name (e.g., delhi, mumbai, bangalore)",
                    "enum": SUPPORTED_CITIES,
                },
                "area": {
                    "type": "string",
                    "description": "Specific area within the city (optional)"
                },
                "capacity": {
                    "type": "integer",
                    "description": "Minimum number of people the venue should accommodate"
                },
                "budget_max": {
                    "type": "integer",
                    "description": "Maximum budget in rupees"
                },
                "event_type": {
                    "type": "string",
                    "description": "Type of event",
                    "enum": SUPPORTED_EVENT_TYPES,
                }
            },
            "required": []
        }),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchVenuesArgs {
    city: Option<String>,
    area: Option<String>,
    capacity: Option<u32>,
    budget_max: Option<u64>,
    event_type: Option<String>,
}

fn search_venues_tool(engine: &EventEngine, arguments: Value) -> crate::Result<Value> {
    let args: SearchVenuesArgs = decode_args("search_venues", arguments)?;
    let results = engine.search_venues(&VenueQuery {
        city: args.city.clone(),
        area: args.area.clone(),
        capacity: args.capacity,
        budget_max: args.budget_max,
        event_type: args.event_type.clone(),
        ..VenueQuery::default()
    });

    let venues: Vec<Value> = results
        .iter()
        .take(TOOL_MAX_VENUES)
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    Ok(json!({
        "success": true,
        "total_found": results.len(),
        "venues": venues,
        "search_criteria": {
            "city": args.city,
            "area": args.area,
            "capacity": args.capacity,
            "budget_max": args.budget_max,
            "event_type": args.event_type,
        }
    }))
}

// --- search_vendors ---

fn search_vendors_definition() -> ToolDefinition {
    ToolDefinition {
        name: "search_vendors",
        description: "Search for event vendors like caterers, photographers, decorators, etc.",
        parameters: json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name",
                    "enum": SUPPORTED_CITIES,
                },
                "vendor_type": {
                    "type": "string",
                    "description": "Type of vendor needed",
                    "enum": SUPPORTED_VENDOR_TYPES,
                },
                "budget_max": {
                    "type": "integer",
                    "description": "Maximum budget in rupees"
                },
                "speciality": {
                    "type": "string",
                    "description": "Vendor speciality (e.g., wedding, corporate, traditional)"
                }
            },
            "required": ["vendor_type"]
        }),
    }
}

#[derive(Debug, Deserialize)]
struct SearchVendorsArgs {
    vendor_type: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    budget_max: Option<u64>,
    #[serde(default)]
    speciality: Option<String>,
}

fn search_vendors_tool(engine: &EventEngine, arguments: Value) -> crate::Result<Value> {
    let args: SearchVendorsArgs = decode_args("search_vendors", arguments)?;
    let results = engine.search_vendors(&VendorQuery {
        city: args.city.clone(),
        vendor_type: Some(args.vendor_type.clone()),
        budget_max: args.budget_max,
        speciality: args.speciality.clone(),
        ..VendorQuery::default()
    });

    let vendors: Vec<Value> = results
        .iter()
        .take(TOOL_MAX_VENDORS)
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    Ok(json!({
        "success": true,
        "total_found": results.len(),
        "vendor_type": args.vendor_type,
        "vendors": vendors,
        "search_criteria": {
            "city": args.city,
            "vendor_type": args.vendor_type,
            "budget_max": args.budget_max,
            "speciality": args.speciality,
        }
    }))
}

// --- estimate_budget ---

fn estimate_budget_definition() -> ToolDefinition {
    ToolDefinition {
        name: "estimate_budget",
        description: "Calculate detailed budget estimate for an event",
        parameters: json!({
            "type": "object",
            "properties": {
                "event_type": {
                    "type": "string",
                    "description": "Type of event",
                    "enum": ESTIMATE_EVENT_TYPES,
                },
                "guest_count": {
                    "type": "integer",
                    "description": "Number of guests/attendees",
                    "minimum": 1
                },
                "city": {
                    "type": "string",
                    "description": "City where event will be held",
                    "enum": SUPPORTED_CITIES,
                },
                "budget_level": {
                    "type": "string",
                    "description": "Budget level preference",
                    "enum": ["low", "medium", "high"],
                    "default": "medium"
                }
            },
            "required": ["event_type", "guest_count"]
        }),
    }
}

#[derive(Debug, Deserialize)]
struct EstimateBudgetArgs {
    event_type: String,
    guest_count: u32,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    budget_level: Option<String>,
}

fn estimate_budget_tool(engine: &EventEngine, arguments: Value) -> crate::Result<Value> {
    let args: EstimateBudgetArgs = decode_args("estimate_budget", arguments)?;
    let tier = args
        .budget_level
        .as_deref()
        .map_or_else(BudgetTier::default, BudgetTier::from_label);
    let estimate = engine.get_budget_estimate(
        &args.event_type,
        args.guest_count,
        args.city.as_deref(),
        tier,
    );

    Ok(json!({
        "success": true,
        "event_type": estimate.event_type,
        "guest_count": estimate.guest_count,
        "city": estimate.city,
        "budget_level": estimate.budget_level,
        "total_estimate": estimate.total_estimate,
        "per_person_cost": estimate.per_person_average,
        "breakdown": estimate.breakdown,
        "subtotal": estimate.subtotal,
        "contingency": estimate.contingency,
    }))
}

// --- get_recommendations ---

fn get_recommendations_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_recommendations",
        description: "Get intelligent recommendations based on natural language query",
        parameters: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Natural language query describing event needs"
                },
                "city": {
                    "type": "string",
                    "description": "Preferred city",
                    "enum": SUPPORTED_CITIES,
                },
                "budget": {
                    "type": "integer",
                    "description": "Budget limit in rupees"
                },
                "guest_count": {
                    "type": "integer",
                    "description": "Number of guests"
                }
            },
            "required": ["query"]
        }),
    }
}

#[derive(Debug, Deserialize)]
struct GetRecommendationsArgs {
    query: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    budget: Option<u64>,
    #[serde(default)]
    guest_count: Option<u32>,
}

fn get_recommendations_tool(engine: &EventEngine, arguments: Value) -> crate::Result<Value> {
    let args: GetRecommendationsArgs = decode_args("get_recommendations", arguments)?;
    let recommendations = engine.get_recommendations(&RecommendationRequest {
        query: args.query,
        city: args.city,
        budget: args.budget,
        guest_count: args.guest_count,
    });

    let venues: Vec<Value> = recommendations
        .venues
        .iter()
        .take(TOOL_RECOMMENDATION_VENUES)
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    let mut vendors = serde_json::Map::new();
    for (category, matches) in &recommendations.vendors {
        let trimmed: Vec<Value> = matches
            .iter()
            .take(TOOL_RECOMMENDATION_VENDORS_PER_TYPE)
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?;
        vendors.insert(category.clone(), Value::Array(trimmed));
    }

    Ok(json!({
        "success": true,
        "query": recommendations.query,
        "detected_event_type": recommendations.detected_event_type,
        "capacity": recommendations.guest_count,
        "venues": venues,
        "vendors": vendors,
        "budget_estimate": recommendations.budget_estimate,
        "total_results": recommendations.total_results,
    }))
}

// --- get_cities_and_areas ---

fn get_cities_and_areas_definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_cities_and_areas",
        description: "Get list of available cities and areas for event planning",
        parameters: json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "Specific city to get areas for (optional)"
                }
            },
            "required": []
        }),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GetCitiesAndAreasArgs {
    city: Option<String>,
}

fn get_cities_and_areas_tool(engine: &EventEngine, arguments: Value) -> crate::Result<Value> {
    let args: GetCitiesAndAreasArgs = decode_args("get_cities_and_areas", arguments)?;
    match args.city {
        Some(city) => {
            let areas = engine.city_areas(&city);
            Ok(json!({
                "success": true,
                "city": city,
                "areas": areas,
                "total_areas": areas.len(),
            }))
        }
        None => {
            let cities = engine.city_names();
            Ok(json!({
                "success": true,
                "cities": cities,
                "total_cities": cities.len(),
            }))
        }
    }
}

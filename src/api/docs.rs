use serde_json::{json, Value};

/// Self-description served at `GET /`.
pub fn api_docs() -> Value {
    json!({
        "name": "Cryptix API Service",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API service for logging and monitoring Cryptix platform activities",
        "endpoints": {
            "/": {
                "methods": ["GET"],
                "description": "This documentation"
            },
            "/health": {
                "methods": ["GET"],
                "description": "Health check endpoint",
                "response": {
                    "status": "String - current health status",
                    "timestamp": "ISO 8601 timestamp (UTC)"
                }
            },
            "/log": {
                "methods": ["GET", "POST"],
                "description": "Request logging endpoint",
                "request": {
                    "body": "Optional JSON body (POST only)"
                },
                "response": {
                    "message": "String - confirmation message",
                    "request_details": {
                        "method": "HTTP method used",
                        "url": "Request URL",
                        "headers": "Request headers",
                        "timestamp": "ISO 8601 timestamp (UTC)",
                        "remote_addr": "Client IP address",
                        "body": "Request body (POST requests only)"
                    }
                }
            },
            "/fraud": {
                "methods": ["POST"],
                "description": "Analyze a transaction for fraud detection",
                "request": {
                    "transaction": {
                        "value": "Number - transaction value",
                        "timestamp": "String - transaction timestamp",
                        "from": "String - sender address",
                        "to": "String - receiver address"
                    }
                },
                "response": {
                    "analysis": {
                        "riskScore": "Number - risk between 0.0 and 1.0",
                        "isFraudulent": "Boolean - fraud verdict"
                    }
                }
            },
            "/recommendations": {
                "methods": ["GET"],
                "description": "Get personalized event recommendations for a user",
                "request": {
                    "userId": "Query parameter - user identifier (required)",
                    "limit": "Query parameter - maximum number of recommendations (default 10)"
                },
                "response": {
                    "recommendations": [
                        { "eventId": "Integer - event identifier", "eventName": "String - event name" }
                    ]
                }
            }
        }
    })
}
